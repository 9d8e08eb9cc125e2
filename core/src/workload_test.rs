#[cfg(test)]
mod tests {
    use crate::workload::{EvenValues, Producer, SAMPLE_TABLE, Sequence};
    use std::collections::BTreeMap;

    #[test]
    fn test_sequence_by_value_yields_ascending_items() {
        assert_eq!(Sequence::new(5).produce(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_sequence_empty() {
        let producer = Sequence::new(0);
        assert!(producer.produce().is_empty());
        assert!(producer.is_empty());
        assert!(producer.expected().is_empty());
    }

    #[test]
    fn test_refill_does_not_leak_previous_contents() {
        let mut out = Vec::new();
        Sequence::new(3).refill(&mut out);
        assert_eq!(out, vec![0, 1, 2]);
        Sequence::new(5).refill(&mut out);
        assert_eq!(out, vec![0, 1, 2, 3, 4]);
        Sequence::new(2).refill(&mut out);
        assert_eq!(out, vec![0, 1]);
    }

    #[test]
    fn test_produce_into_appends() {
        let mut out = vec![9];
        Sequence::new(2).produce_into(&mut out);
        assert_eq!(out, vec![9, 0, 1]);
    }

    #[test]
    fn test_sample_table_shape() {
        assert_eq!(SAMPLE_TABLE.len(), 20);
        assert_eq!(SAMPLE_TABLE.get(&1), Some(&0));
        assert_eq!(SAMPLE_TABLE.get(&20), Some(&19));
    }

    #[test]
    fn test_even_values_of_sample_table() {
        let producer = EvenValues::sample();
        let expected = vec![0, 2, 4, 6, 8, 10, 12, 14, 16, 18];
        assert_eq!(producer.produce(), expected);
        assert_eq!(producer.expected(), expected);
        assert_eq!(producer.len(), 10);
    }

    #[test]
    fn test_even_values_sorts_by_value_not_key() {
        let table: BTreeMap<i32, i32> = [(1, 8), (2, 3), (3, 2), (4, 6), (5, -4)].into_iter().collect();
        let producer = EvenValues::new(&table);
        assert_eq!(producer.produce(), vec![-4, 2, 6, 8]);

        let mut out = vec![100, 200];
        producer.refill(&mut out);
        assert_eq!(out, vec![-4, 2, 6, 8]);
    }
}
