use super::*;

#[test]
fn test_duration_units_are_ordered_largest_first() {
    assert!(DurationUnit::Days > DurationUnit::Hours);
    assert!(DurationUnit::Seconds > DurationUnit::Milliseconds);
    assert!(DurationUnit::Microseconds > DurationUnit::Nanoseconds);

    let mut sorted = DurationUnit::LARGEST_FIRST;
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(sorted, DurationUnit::LARGEST_FIRST);
}

#[test]
fn test_duration_unit_local_value_uses_modulus() {
    // 2 days, 3 hours, 4 minutes, 5 seconds
    let total = 2 * DurationUnit::Days.nanos()
        + 3 * DurationUnit::Hours.nanos()
        + 4 * DurationUnit::Minutes.nanos()
        + 5 * DurationUnit::Seconds.nanos();

    assert_eq!(DurationUnit::Days.local_value(total), 2);
    assert_eq!(DurationUnit::Hours.local_value(total), 3);
    assert_eq!(DurationUnit::Minutes.local_value(total), 4);
    assert_eq!(DurationUnit::Seconds.local_value(total), 5);
    assert_eq!(DurationUnit::Milliseconds.local_value(total), 0);
}

#[test]
fn test_days_hold_full_magnitude() {
    let total = 400 * DurationUnit::Days.nanos();
    assert_eq!(DurationUnit::Days.local_value(total), 400);
}

#[test]
fn test_duration_unit_from_str() {
    assert_eq!("days".parse::<DurationUnit>().unwrap(), DurationUnit::Days);
    assert_eq!("Hour".parse::<DurationUnit>().unwrap(), DurationUnit::Hours);
    assert_eq!("ms".parse::<DurationUnit>().unwrap(), DurationUnit::Milliseconds);
    assert_eq!(" ns ".parse::<DurationUnit>().unwrap(), DurationUnit::Nanoseconds);
}

#[test]
fn test_duration_unit_from_str_rejects_unknown() {
    let err = "weeks".parse::<DurationUnit>().unwrap_err();
    assert!(matches!(err, PrettyError::Unsupported { .. }));
    assert!(err.to_string().contains("weeks"));
}

#[test]
fn test_representation_separators() {
    assert_eq!(Representation::Long.group_separator(), ", ");
    assert_eq!(Representation::Long.last_group_separator(), " and ");
    assert_eq!(Representation::Short.last_group_separator(), " ");
    assert_eq!(Representation::Compact.group_separator(), "");
    assert_eq!(Representation::CompactWithSpace.group_separator(), " ");
    assert_eq!(Representation::CompactWithSpace.unit_value_separator(), "");
}

#[test]
fn test_representation_round_trips_through_display() {
    for rep in [
        Representation::Long,
        Representation::Short,
        Representation::Compact,
        Representation::CompactWithSpace,
    ] {
        assert_eq!(rep.to_string().parse::<Representation>().unwrap(), rep);
    }
    assert_eq!(
        "compact_with_space".parse::<Representation>().unwrap(),
        Representation::CompactWithSpace
    );
}

#[test]
fn test_representation_rejects_unknown() {
    assert!("verbose".parse::<Representation>().is_err());
}

#[test]
fn test_rounding_to_multiple() {
    assert_eq!(Rounding::Down.round_to_multiple(0, 10), 0);
    assert_eq!(Rounding::Up.round_to_multiple(0, 10), 0);
    assert_eq!(Rounding::Up.round_to_multiple(40, 10), 40);
    assert_eq!(Rounding::Up.round_to_multiple(41, 10), 50);
    assert_eq!(Rounding::NearestOrUp.round_to_multiple(44, 10), 40);
    assert_eq!(Rounding::NearestOrUp.round_to_multiple(45, 10), 50);
}

#[test]
fn test_rounding_from_str() {
    assert_eq!("down".parse::<Rounding>().unwrap(), Rounding::Down);
    assert_eq!("UP".parse::<Rounding>().unwrap(), Rounding::Up);
    assert_eq!(
        "nearest_or_up".parse::<Rounding>().unwrap(),
        Rounding::NearestOrUp
    );
    assert!("sideways".parse::<Rounding>().is_err());
}

#[test]
fn test_rounding_serde_names() {
    let json = serde_json::to_string(&Rounding::NearestOrUp).unwrap();
    assert_eq!(json, "\"nearest-or-up\"");
    let rep: Representation = serde_json::from_str("\"compact-with-space\"").unwrap();
    assert_eq!(rep, Representation::CompactWithSpace);
}

#[test]
fn test_byte_unit_for_bytes_decimal() {
    assert_eq!(ByteUnit::for_bytes(0, ByteBase::Decimal), ByteUnit::Byte);
    assert_eq!(ByteUnit::for_bytes(999, ByteBase::Decimal), ByteUnit::Byte);
    assert_eq!(ByteUnit::for_bytes(1000, ByteBase::Decimal), ByteUnit::Kilo);
    assert_eq!(ByteUnit::for_bytes(1_000_000, ByteBase::Decimal), ByteUnit::Mega);
    assert_eq!(
        ByteUnit::for_bytes(999_999_999_999, ByteBase::Decimal),
        ByteUnit::Giga
    );
}

#[test]
fn test_byte_unit_for_bytes_binary() {
    assert_eq!(ByteUnit::for_bytes(1023, ByteBase::Binary), ByteUnit::Byte);
    assert_eq!(ByteUnit::for_bytes(1024, ByteBase::Binary), ByteUnit::Kilo);
    assert_eq!(ByteUnit::for_bytes(1000 * 1024, ByteBase::Binary), ByteUnit::Kilo);
}

#[test]
fn test_byte_unit_for_largest_value_is_exa() {
    assert_eq!(ByteUnit::for_bytes(u64::MAX, ByteBase::Decimal), ByteUnit::Exa);
    assert_eq!(ByteUnit::for_bytes(u64::MAX, ByteBase::Binary), ByteUnit::Exa);
}


#[test]
fn test_byte_base_from_str() {
    assert_eq!("1000".parse::<ByteBase>().unwrap(), ByteBase::Decimal);
    assert_eq!("binary".parse::<ByteBase>().unwrap(), ByteBase::Binary);
    assert!("512".parse::<ByteBase>().is_err());
}
