use chartjs_model::charts::MeterDataset;
use chartjs_model::core::{NativeObject, ObjectType};
use chartjs_model::data::IsDataset;
use proptest::prelude::*;

proptest! {
    #[test]
    fn value_or_array_preserves_values_property(
        values in prop::collection::vec(-1.0e9f64..1.0e9, 0..16)
    ) {
        let mut native = NativeObject::new();
        native.set_value_or_array("borderWidth", &values).expect("store");

        let expected_type = match values.len() {
            0 => ObjectType::Undefined,
            1 => ObjectType::Number,
            _ => ObjectType::Array,
        };
        prop_assert_eq!(native.type_of("borderWidth"), expected_type);

        let read = native.get_f64_value_or_array("borderWidth", -1.0);
        if values.is_empty() {
            prop_assert_eq!(read, vec![-1.0]);
        } else {
            prop_assert_eq!(read, values);
        }
    }

    #[test]
    fn meter_data_always_sums_to_max_property(
        max in 0.0f64..1.0e6,
        value in -1.0e6f64..2.0e6
    ) {
        let mut meter = MeterDataset::new(max).expect("meter");
        meter.set_value(value).expect("value");

        let data = meter.dataset().data().expect("data");
        prop_assert_eq!(data.len(), 2);
        prop_assert!(data[0] >= 0.0 && data[0] <= max);
        prop_assert!(data[1] >= 0.0);
        prop_assert!((data[0] + data[1] - max).abs() <= 1e-6);
    }
}
