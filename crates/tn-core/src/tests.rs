//! Unit tests for tn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{IdKind, LocationId};

    #[test]
    fn parse_prefers_integers() {
        assert_eq!("1001400".parse::<LocationId>().unwrap(), LocationId::Int(1001400));
        assert_eq!(" 7 ".parse::<LocationId>().unwrap(), LocationId::Int(7));
        assert_eq!("A7".parse::<LocationId>().unwrap(), LocationId::Name("A7".into()));
    }

    #[test]
    fn empty_field_is_rejected() {
        assert!("".parse::<LocationId>().is_err());
        assert!("   ".parse::<LocationId>().is_err());
    }

    #[test]
    fn kind() {
        assert_eq!(LocationId::from(3).kind(), IdKind::Int);
        assert_eq!(LocationId::from("x").kind(), IdKind::Name);
    }

    #[test]
    fn ordering_within_kind() {
        assert!(LocationId::Int(2) < LocationId::Int(10));
        assert!(LocationId::from("A") < LocationId::from("B"));
    }

    #[test]
    fn display_is_raw_value() {
        assert_eq!(LocationId::Int(42).to_string(), "42");
        assert_eq!(LocationId::from("Depot").to_string(), "Depot");
    }
}

#[cfg(test)]
mod edge {
    use crate::EdgeRecord;

    #[test]
    fn self_pair() {
        assert!(EdgeRecord::new(1, 1, 0.0).is_self_pair());
        assert!(!EdgeRecord::new(1, 2, 3.0).is_self_pair());
    }
}

#[cfg(test)]
mod vehicle {
    use crate::{VehicleClass, VehicleRates};

    #[test]
    fn column_order() {
        let labels: Vec<_> = VehicleClass::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(labels, ["moto", "car", "rv", "bus", "truck"]);
    }

    #[test]
    fn get_matches_fields() {
        let c = VehicleRates::DEFAULT_COEFFICIENTS;
        assert_eq!(c.get(VehicleClass::Moto), 0.8);
        assert_eq!(c.get(VehicleClass::Truck), 3.6);
        let collected: Vec<f64> = c.iter().map(|(_, v)| v).collect();
        assert_eq!(collected, vec![0.8, 1.2, 1.5, 2.2, 3.6]);
    }

    #[test]
    fn scaled() {
        let r = VehicleRates::splat(10.0).scaled(0.5);
        assert_eq!(r, VehicleRates::splat(5.0));
    }
}

#[cfg(test)]
mod time {
    use jiff::civil::{Weekday, time};

    use crate::{WEEK, format_time, is_weekend, weekday_name};

    #[test]
    fn week_starts_monday() {
        assert_eq!(WEEK[0], Weekday::Monday);
        assert_eq!(WEEK[6], Weekday::Sunday);
        assert_eq!(WEEK.iter().filter(|d| is_weekend(**d)).count(), 2);
    }

    #[test]
    fn names() {
        assert_eq!(weekday_name(Weekday::Wednesday), "Wednesday");
        assert_eq!(weekday_name(Weekday::Sunday), "Sunday");
    }

    #[test]
    fn formats_hms() {
        assert_eq!(format_time(time(0, 0, 0, 0)), "00:00:00");
        assert_eq!(format_time(time(23, 59, 59, 500_000_000)), "23:59:59");
    }
}
