use std::any::Any;
use std::collections::HashMap;

use weft_ids::ListenerID;

pub type EventHandler = Box<dyn FnMut(&dyn Any) + Send>;

/// Named events with listeners invoked synchronously in registration order.
#[derive(Default)]
pub struct EventBus {
    listeners: HashMap<String, Vec<(ListenerID, EventHandler)>>,
    next_id: u32,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(
        &mut self,
        event: impl Into<String>,
        handler: impl FnMut(&dyn Any) + Send + 'static,
    ) -> ListenerID {
        self.next_id += 1;
        let id = ListenerID::new(self.next_id);
        self.listeners
            .entry(event.into())
            .or_default()
            .push((id, Box::new(handler)));
        id
    }

    /// Typed convenience: the handler only runs for payloads of type `T`.
    pub fn add_typed_listener<T: Any>(
        &mut self,
        event: impl Into<String>,
        mut handler: impl FnMut(&T) + Send + 'static,
    ) -> ListenerID {
        let event = event.into();
        let name = event.clone();
        self.add_listener(event, move |payload| match payload.downcast_ref::<T>() {
            Some(value) => handler(value),
            None => log::warn!(
                "event '{name}': payload is not {}",
                std::any::type_name::<T>()
            ),
        })
    }

    /// Returns false when the listener was not registered for `event`.
    pub fn remove_listener(&mut self, event: &str, id: ListenerID) -> bool {
        let Some(list) = self.listeners.get_mut(event) else {
            return false;
        };
        let before = list.len();
        list.retain(|(lid, _)| *lid != id);
        let removed = list.len() != before;
        if list.is_empty() {
            self.listeners.remove(event);
        }
        removed
    }

    /// Calls every listener of `event`. Returns how many ran.
    pub fn trigger(&mut self, event: &str, payload: &dyn Any) -> usize {
        let Some(list) = self.listeners.get_mut(event) else {
            log::debug!("event '{event}' has no listeners");
            return 0;
        };
        for (_, handler) in list.iter_mut() {
            handler(payload);
        }
        list.len()
    }

    pub fn has_event(&self, event: &str) -> bool {
        self.listeners.contains_key(event)
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.get(event).map_or(0, Vec::len)
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}
