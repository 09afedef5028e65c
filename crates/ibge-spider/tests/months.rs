use chrono::NaiveDate;
use ibge_spider::sidra::{format_month_label, parse_month_label, Month, NormalizeError};

#[test]
fn month_names_map_to_numbers_in_order() {
    let names = [
        "janeiro",
        "fevereiro",
        "março",
        "abril",
        "maio",
        "junho",
        "julho",
        "agosto",
        "setembro",
        "outubro",
        "novembro",
        "dezembro",
    ];

    for (i, name) in names.iter().enumerate() {
        let month = Month::from_name(name).unwrap();
        assert_eq!(month.number(), i as u32 + 1);
        assert_eq!(month.code(), format!("{:02}", i + 1));
        assert_eq!(month.name(), *name);
        assert_eq!(Month::from_number(i as u32 + 1), Some(month));
    }

    assert_eq!(Month::from_number(0), None);
    assert_eq!(Month::from_number(13), None);
}

#[test]
fn month_lookup_is_exact() {
    // no accent folding, no abbreviations, no case folding at this level
    assert_eq!(Month::from_name("marco"), None);
    assert_eq!(Month::from_name("mar"), None);
    assert_eq!(Month::from_name("Março"), None);
    assert_eq!(Month::from_name(" março"), None);
    assert!("set".parse::<Month>().is_err());
    assert_eq!("setembro".parse::<Month>(), Ok(Month::September));
}

#[test]
fn labels_parse_to_first_of_month() {
    let march = NaiveDate::from_ymd_opt(2022, 3, 1).unwrap();
    assert_eq!(parse_month_label("Março 2022").unwrap(), march);
    assert_eq!(parse_month_label("março 2022").unwrap(), march);
    assert_eq!(parse_month_label("  MARÇO   2022\t").unwrap(), march);
    assert_eq!(
        parse_month_label("dezembro 1979").unwrap(),
        NaiveDate::from_ymd_opt(1979, 12, 1).unwrap()
    );
}

#[test]
fn malformed_labels_are_unparseable() {
    for label in [
        "",
        "2022",
        "março",
        "marco 2022",
        "mar 2022",
        "março 22",
        "março 20222",
        "março de 2022",
        "2022 março",
        "março 2022 extra",
        "Brasil",
        "Mês",
    ] {
        assert_eq!(
            parse_month_label(label),
            Err(NormalizeError::UnparseableDate {
                label: label.to_string()
            }),
            "label {label:?}"
        );
    }
}

#[test]
fn formatted_labels_round_trip() {
    for year in [1979, 2000, 2022] {
        for month in Month::ALL {
            let date = NaiveDate::from_ymd_opt(year, month.number(), 1).unwrap();
            let label = format_month_label(date);
            assert_eq!(label, format!("{} {year}", month.name()));
            assert_eq!(parse_month_label(&label).unwrap(), date);
        }
    }
}
