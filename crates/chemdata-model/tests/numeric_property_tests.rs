use chemdata_model::extract_number;
use proptest::prelude::*;

fn unit() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("°C"),
        Just("°F"),
        Just("K"),
        Just("g/cu cm at 20 °C"),
        Just(""),
    ]
}

proptest! {
    #[test]
    fn first_number_survives_any_unit(
        negative in any::<bool>(),
        whole in 0u32..100_000,
        frac in 0u32..1000,
        unit in unit(),
    ) {
        let sign = if negative { "-" } else { "" };
        let text = format!("{sign}{whole}.{frac:03} {unit}");
        let expected: f64 = format!("{sign}{whole}.{frac:03}").parse().unwrap();
        prop_assert_eq!(extract_number(&text), Some(expected));
    }

    #[test]
    fn digitless_text_is_none(text in "[A-Za-z /°()]{0,24}") {
        prop_assert_eq!(extract_number(&text), None);
    }
}
