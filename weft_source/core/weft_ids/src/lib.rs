pub mod ids;

pub use ids::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_nil() {
        let nil = NodeID::nil();
        assert!(nil.is_nil());
        assert_eq!(nil.index(), 0);
        assert_eq!(nil.generation(), 0);
        assert_eq!(NodeID::default(), nil);
    }

    #[test]
    fn node_id_parts() {
        let id = NodeID::from_parts(5, 2);
        assert_eq!(id.index(), 5);
        assert_eq!(id.generation(), 2);
        assert!(!id.is_nil());
    }

    #[test]
    fn node_id_roundtrip_u64_edges() {
        let cases: &[(u32, u32)] = &[(1, 0), (0, 1), (12345, 77), (u32::MAX, u32::MAX)];

        for &(i, g) in cases {
            let id = NodeID::from_parts(i, g);
            assert_eq!(
                NodeID::from_u64(id.as_u64()),
                id,
                "roundtrip failed for index={i} generation={g}"
            );
        }
    }

    #[test]
    fn same_slot_different_generation_is_distinct() {
        assert_ne!(NodeID::from_parts(3, 0), NodeID::from_parts(3, 1));
    }

    #[test]
    fn display_and_debug_formats() {
        let id = NodeID::from_parts(7, 1);
        assert_eq!(id.to_string(), "7:1");
        assert_eq!(format!("{id:?}"), "NodeID(7:1)");
        assert_eq!(format!("{:?}", ListenerID::new(4)), "ListenerID(4:0)");
    }
}
