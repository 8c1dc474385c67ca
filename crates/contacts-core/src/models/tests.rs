#[cfg(test)]
mod model_tests {
    use jiff::civil::date;

    use crate::{
        error::ContactsError,
        models::{Birthday, Name, Phone, Record},
    };

    fn create_test_record() -> Record {
        let mut record = Record::new(Name::new("John").unwrap());
        record.add_phone("9876543210").unwrap();
        record
    }

    #[test]
    fn test_phone_accepts_ten_digits() {
        for raw in ["0000000000", "0501234567", "9999999999"] {
            let phone = Phone::new(raw).unwrap();
            assert_eq!(phone.value(), raw);
            assert_eq!(phone.to_string(), raw);
        }
    }

    #[test]
    fn test_phone_rejects_bad_input() {
        for raw in [
            "",
            "123456789",
            "12345678901",
            "12345abcde",
            "+380501234",
            "050 123 45",
            "１２３４５６７８９０",
        ] {
            let err = Phone::new(raw).unwrap_err();
            assert!(
                matches!(err, ContactsError::InvalidInput { .. }),
                "expected validation error for {raw:?}"
            );
        }
    }

    #[test]
    fn test_name_is_stored_verbatim() {
        let name = Name::new("Mary-Jane").unwrap();
        assert_eq!(name.value(), "Mary-Jane");
        assert!(Name::new("").is_err());
        assert!(Name::new("   ").is_err());
    }

    #[test]
    fn test_birthday_parses_real_dates() {
        let birthday = Birthday::parse("29.02.2024").unwrap();
        assert_eq!(birthday.date(), date(2024, 2, 29));
        assert_eq!(birthday.to_string(), "29.02.2024");

        let birthday = Birthday::parse("01.12.1985").unwrap();
        assert_eq!(birthday.month(), 12);
        assert_eq!(birthday.day(), 1);
    }

    #[test]
    fn test_birthday_rejects_impossible_and_malformed() {
        for raw in [
            "31.02.2024",
            "29.02.2023",
            "32.01.2024",
            "15.13.2024",
            "2024-01-15",
            "15/01/2024",
            "birthday",
            "",
        ] {
            assert!(
                matches!(
                    Birthday::parse(raw),
                    Err(ContactsError::InvalidInput { .. })
                ),
                "expected validation error for {raw:?}"
            );
        }
    }

    #[test]
    fn test_value_types_from_str() {
        let name: Name = "Ann".parse().unwrap();
        assert_eq!(name.to_string(), "Ann");
        assert!("  ".parse::<Name>().is_err());

        let phone: Phone = "0501234567".parse().unwrap();
        assert_eq!(phone.value(), "0501234567");
        assert!("050123456".parse::<Phone>().is_err());

        let birthday: Birthday = "08.06.1990".parse().unwrap();
        assert_eq!(birthday.date(), date(1990, 6, 8));
        assert!("31.04.1990".parse::<Birthday>().is_err());
    }

    #[test]
    fn test_add_phone_keeps_duplicates() {
        let mut record = create_test_record();
        record.add_phone("9876543210").unwrap();
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_add_phone_propagates_validation() {
        let mut record = create_test_record();
        assert!(record.add_phone("123").is_err());
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut record = create_test_record();
        record.add_phone("1111111111").unwrap();
        record.add_phone("9876543210").unwrap();

        record.remove_phone("9876543210");
        let values: Vec<&str> = record.phones().iter().map(Phone::value).collect();
        assert_eq!(values, ["1111111111"]);

        // Absent numbers are a no-op
        record.remove_phone("2222222222");
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_replaces_number() {
        let mut record = create_test_record();
        record.add_phone("5555555555").unwrap();

        record.edit_phone("9876543210", "1111111111").unwrap();

        assert!(record.find_phone("1111111111").is_some());
        assert!(record.find_phone("9876543210").is_none());
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_edit_phone_with_same_number_keeps_it() {
        let mut record = create_test_record();
        record.edit_phone("9876543210", "9876543210").unwrap();
        let values: Vec<&str> = record.phones().iter().map(Phone::value).collect();
        assert_eq!(values, ["9876543210"]);
    }

    #[test]
    fn test_edit_phone_with_absent_old_number_adds_new() {
        let mut record = create_test_record();
        record.edit_phone("9876543210", "1111111111").unwrap();
        record.edit_phone("9876543210", "1111111111").unwrap();

        let values: Vec<&str> = record.phones().iter().map(Phone::value).collect();
        assert_eq!(values, ["1111111111", "1111111111"]);
    }

    #[test]
    fn test_edit_phone_invalid_new_number_leaves_record_untouched() {
        let mut record = create_test_record();
        assert!(record.edit_phone("9876543210", "111").is_err());
        assert!(record.find_phone("9876543210").is_some());
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_find_phone_first_match() {
        let record = create_test_record();
        assert_eq!(
            record.find_phone("9876543210").map(Phone::value),
            Some("9876543210")
        );
        assert!(record.find_phone("0000000000").is_none());
    }

    #[test]
    fn test_add_birthday_only_once() {
        let mut record = create_test_record();
        record.add_birthday("12.06.1985").unwrap();

        let err = record.add_birthday("01.01.2000").unwrap_err();
        assert!(matches!(err, ContactsError::BirthdayAlreadySet { .. }));
        assert_eq!(err.to_string(), "Birthday is already set for John.");
        assert_eq!(
            record.birthday().map(ToString::to_string).as_deref(),
            Some("12.06.1985")
        );
    }

    #[test]
    fn test_add_birthday_invalid_leaves_none() {
        let mut record = create_test_record();
        assert!(record.add_birthday("31.02.2024").is_err());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_show_birthday() {
        let mut record = create_test_record();
        assert_eq!(record.show_birthday(), "No birthday set");

        record.add_birthday("05.03.1999").unwrap();
        assert_eq!(record.show_birthday(), "John's birthday is on 05.03.1999");
    }

    #[test]
    fn test_record_display() {
        let mut record = Record::new(Name::new("Ann").unwrap());
        assert_eq!(
            record.to_string(),
            "Contact name: Ann, birthday: ----------, phones: ----------"
        );

        record.add_phone("0501234567").unwrap();
        record.add_phone("0671234567").unwrap();
        record.add_birthday("08.06.1990").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Ann, birthday: 08.06.1990, phones: 0501234567; 0671234567"
        );
    }

    #[test]
    fn test_record_serde_revalidates() {
        let mut record = create_test_record();
        record.add_birthday("12.06.1985").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"1985-06-12\""));
        let restored: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, record);

        let tampered = json.replace("9876543210", "98765");
        assert!(serde_json::from_str::<Record>(&tampered).is_err());
    }
}
