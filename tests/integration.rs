use calendrica::calendars::{hebrew, CALENDAR_ROUND};
use calendrica::{
    Bahai, BahaiDate, CalendarError, Chinese, ChineseDate, Coptic, Date, DateConvertible, Ethiopic,
    Fixed, French, FrenchAstronomical, Gregorian, Haab, Hebrew, HinduLunarDate, Islamic, Iso,
    IsoDate, Julian, LongCount, Mayan, ModifiedHinduLunar, ModifiedHinduSolar, OldHinduLunar,
    OldHinduSolar, Persian, Tzolkin, WeekAware, Weekday, Ymd,
};
use chrono::NaiveDate;

const fn ymd(year: i64, month: u8, day: u8) -> Ymd {
    Ymd::new(year, month, day)
}

/// One day seen through every closed-form calendar.
struct Row {
    rd: i64,
    gregorian: Ymd,
    julian: Ymd,
    hebrew: Ymd,
    islamic: Ymd,
    persian: Ymd,
    coptic: Ymd,
    ethiopic: Ymd,
    bahai: BahaiDate,
    iso: IsoDate,
    french: Ymd,
    long_count: LongCount,
    haab: Haab,
    tzolkin: Tzolkin,
}

const ROWS: [Row; 5] = [
    Row {
        rd: -214_193,
        gregorian: ymd(-586, 7, 24),
        julian: ymd(-587, 7, 30),
        hebrew: ymd(3174, 5, 10),
        islamic: ymd(-1245, 12, 9),
        persian: ymd(-1208, 5, 1),
        coptic: ymd(-870, 12, 6),
        ethiopic: ymd(-594, 12, 6),
        bahai: BahaiDate::new(-6, 6, 3, 7, 12),
        iso: IsoDate::new(-586, 29, 7),
        french: ymd(-2378, 11, 4),
        long_count: LongCount::new(6, 8, 3, 13, 9),
        haab: Haab::new(11, 12),
        tzolkin: Tzolkin::new(5, 9),
    },
    Row {
        rd: 601_716,
        gregorian: ymd(1648, 6, 10),
        julian: ymd(1648, 5, 31),
        hebrew: ymd(5408, 3, 20),
        islamic: ymd(1058, 5, 18),
        persian: ymd(1027, 3, 21),
        coptic: ymd(1364, 10, 6),
        ethiopic: ymd(1640, 10, 6),
        bahai: BahaiDate::new(0, 9, 14, 5, 6),
        iso: IsoDate::new(1648, 24, 3),
        french: ymd(-144, 9, 22),
        long_count: LongCount::new(12, 1, 10, 2, 18),
        haab: Haab::new(18, 6),
        tzolkin: Tzolkin::new(8, 18),
    },
    Row {
        rd: 710_347,
        gregorian: ymd(1945, 11, 12),
        julian: ymd(1945, 10, 30),
        hebrew: ymd(5706, 9, 7),
        islamic: ymd(1364, 12, 6),
        persian: ymd(1324, 8, 21),
        coptic: ymd(1662, 3, 3),
        ethiopic: ymd(1938, 3, 3),
        bahai: BahaiDate::new(1, 6, 7, 13, 9),
        iso: IsoDate::new(1945, 46, 1),
        french: ymd(154, 2, 21),
        long_count: LongCount::new(12, 16, 11, 16, 9),
        haab: Haab::new(11, 7),
        tzolkin: Tzolkin::new(11, 9),
    },
    Row {
        rd: 730_120,
        gregorian: ymd(2000, 1, 1),
        julian: ymd(1999, 12, 19),
        hebrew: ymd(5760, 10, 23),
        islamic: ymd(1420, 9, 24),
        persian: ymd(1378, 10, 11),
        coptic: ymd(1716, 4, 22),
        ethiopic: ymd(1992, 4, 22),
        bahai: BahaiDate::new(1, 9, 4, 16, 2),
        iso: IsoDate::new(1999, 52, 6),
        french: ymd(208, 4, 12),
        long_count: LongCount::new(12, 19, 6, 15, 2),
        haab: Haab::new(14, 10),
        tzolkin: Tzolkin::new(11, 2),
    },
    Row {
        rd: 738_000,
        gregorian: ymd(2021, 7, 29),
        julian: ymd(2021, 7, 16),
        hebrew: ymd(5781, 5, 20),
        islamic: ymd(1442, 12, 19),
        persian: ymd(1400, 5, 7),
        coptic: ymd(1737, 11, 22),
        ethiopic: ymd(2013, 11, 22),
        bahai: BahaiDate::new(1, 10, 7, 7, 17),
        iso: IsoDate::new(2021, 30, 4),
        french: ymd(229, 11, 11),
        long_count: LongCount::new(13, 0, 8, 13, 2),
        haab: Haab::new(7, 0),
        tzolkin: Tzolkin::new(13, 2),
    },
];

fn check<C: DateConvertible>(rd: i64, fields: C::Fields) {
    let date = Date::<C>::from_fixed(Fixed(rd));
    assert_eq!(*date.fields(), fields, "{} fields of RD {rd}", C::LABEL);
    assert_eq!(
        C::fixed_from_fields(&fields),
        Ok(Fixed(rd)),
        "{} day count of {fields:?}",
        C::LABEL
    );
}

#[test]
fn reference_table_closed_form_calendars() {
    for row in &ROWS {
        check::<Gregorian>(row.rd, row.gregorian);
        check::<Julian>(row.rd, row.julian);
        check::<Hebrew>(row.rd, row.hebrew);
        check::<Islamic>(row.rd, row.islamic);
        check::<Persian>(row.rd, row.persian);
        check::<Coptic>(row.rd, row.coptic);
        check::<Ethiopic>(row.rd, row.ethiopic);
        check::<Bahai>(row.rd, row.bahai);
        check::<Iso>(row.rd, row.iso);
        check::<French>(row.rd, row.french);
    }
}

#[test]
fn reference_table_mayan() {
    for row in &ROWS {
        let date = Date::<Mayan>::from_fixed(Fixed(row.rd));
        let fields = date.fields();
        assert_eq!(fields.long_count, row.long_count);
        assert_eq!(fields.haab, row.haab);
        assert_eq!(fields.tzolkin, row.tzolkin);
        assert_eq!(
            Date::<Mayan>::from_long_count(row.long_count).map(|d| d.fixed()),
            Ok(Fixed(row.rd))
        );
    }
}

#[test]
fn reference_table_astronomical_calendars() {
    let french = [
        ymd(-2378, 11, 5),
        ymd(-144, 9, 22),
        ymd(154, 2, 21),
        ymd(208, 4, 11),
        ymd(229, 11, 11),
    ];
    let chinese = [
        ChineseDate::new(35, 11, 6, false, 12),
        ChineseDate::new(72, 25, 4, true, 20),
        ChineseDate::new(77, 22, 10, false, 8),
        ChineseDate::new(78, 16, 11, false, 25),
        ChineseDate::new(78, 38, 6, false, 20),
    ];
    for (row, (french, chinese)) in ROWS.iter().zip(french.into_iter().zip(chinese)) {
        check::<FrenchAstronomical>(row.rd, french);
        check::<Chinese>(row.rd, chinese);
    }
}

#[test]
fn reference_table_hindu_calendars() {
    let old_solar = [
        ymd(2515, 5, 19),
        ymd(4749, 3, 1),
        ymd(5046, 7, 29),
        ymd(5100, 9, 17),
        ymd(5122, 4, 13),
    ];
    let old_lunar = [
        HinduLunarDate::new(2515, 6, false, 11, false),
        HinduLunarDate::new(4749, 3, false, 20, false),
        HinduLunarDate::new(5046, 8, false, 8, false),
        HinduLunarDate::new(5100, 9, false, 25, false),
        HinduLunarDate::new(5122, 4, false, 21, false),
    ];
    let solar = [
        ymd(-664, 5, 19),
        ymd(1570, 3, 3),
        ymd(1867, 7, 27),
        ymd(1921, 9, 17),
        ymd(1943, 4, 14),
    ];
    let lunar = [
        HinduLunarDate::new(-529, 6, false, 11, false),
        HinduLunarDate::new(1705, 3, false, 20, false),
        HinduLunarDate::new(2002, 8, false, 7, false),
        HinduLunarDate::new(2056, 9, false, 25, false),
        HinduLunarDate::new(2078, 4, false, 21, false),
    ];
    for (i, row) in ROWS.iter().enumerate() {
        check::<OldHinduSolar>(row.rd, old_solar[i]);
        check::<OldHinduLunar>(row.rd, old_lunar[i]);
        check::<ModifiedHinduSolar>(row.rd, solar[i]);
        check::<ModifiedHinduLunar>(row.rd, lunar[i]);
    }
}

#[test]
fn cross_calendar_conversion_goes_through_the_day_count() {
    let gregorian = Date::<Gregorian>::new(ymd(1945, 11, 12)).unwrap();
    let julian = gregorian.to::<Julian>();
    assert_eq!(*julian.fields(), ymd(1945, 10, 30));
    assert_eq!(julian.to::<Gregorian>(), gregorian);
    assert_eq!(gregorian.difference(&julian), 0);
    assert!(!gregorian.precedes(&julian));

    let later = Date::<Islamic>::from_fixed(Fixed(730_120));
    assert!(gregorian.precedes(&later));
    assert!(later.follows(&gregorian));
    assert_eq!(later.difference(&gregorian), 730_120 - 710_347);
}

#[test]
fn leap_year_tables() {
    let gregorian: Vec<i64> = (1896..=1912).filter(|&y| Gregorian::is_leap_year(y)).collect();
    assert_eq!(gregorian, vec![1896, 1904, 1908, 1912]);
    assert!(Gregorian::is_leap_year(2000));
    assert!(Gregorian::is_leap_year(2024));
    assert!(!Gregorian::is_leap_year(1900));
    assert!(!Gregorian::is_leap_year(2023));
    assert!(Julian::is_leap_year(1900));
    assert!(Julian::is_leap_year(-1));
    assert!(!Julian::is_leap_year(-4));
    assert!(Coptic::is_leap_year(1715));
    assert!(Persian::is_leap_year(1399));
    assert!(!Persian::is_leap_year(1403));
    assert!(French::is_leap_year(4));
    assert!(!French::is_leap_year(100));
    assert!(FrenchAstronomical::is_leap_year(3));
    assert!(FrenchAstronomical::is_leap_year(7));
    assert!(FrenchAstronomical::is_leap_year(11));
    let hebrew: Vec<i64> = (5760..5780).filter(|&y| Hebrew::is_leap_year(y)).collect();
    assert_eq!(hebrew, vec![5760, 5763, 5765, 5768, 5771, 5774, 5776, 5779]);
}

#[test]
fn islamic_cycle_has_eleven_leap_years() {
    for start in [1, 31, 1411, 1441] {
        let leaps = (start..start + 30).filter(|&y| Islamic::is_leap_year(y)).count();
        assert_eq!(leaps, 11, "cycle starting {start}");
    }
}

#[test]
fn hebrew_year_lengths() {
    assert_eq!(Hebrew::days_in_year(5760), 385);
    assert!(Hebrew::long_marheshvan(5760));
    assert_eq!(Hebrew::days_in_year(5761), 353);
    assert!(Hebrew::short_kislev(5761));
    assert_eq!(Hebrew::days_in_year(5762), 354);
    assert_eq!(Hebrew::days_in_year(5784), 383);
    assert_eq!(Hebrew::last_month_of_year(5784), hebrew::ADAR_II);
    assert_eq!(
        Date::<Gregorian>::from_fixed(Hebrew::new_year(5785)).fields(),
        &ymd(2024, 10, 3)
    );
}

#[test]
fn hebrew_year_lengths_are_closed() {
    for year in 5000..6000 {
        let length = Hebrew::days_in_year(year);
        assert!(
            matches!(length, 353 | 354 | 355 | 383 | 384 | 385),
            "{year} has {length} days"
        );
    }
}

#[test]
fn calendar_round_has_no_shorter_period() {
    let start = Fixed(730_120);
    let pair = (Mayan::haab_from_fixed(start), Mayan::tzolkin_from_fixed(start));
    let first_repeat = (1..=CALENDAR_ROUND)
        .find(|&n| (Mayan::haab_from_fixed(start + n), Mayan::tzolkin_from_fixed(start + n)) == pair);
    assert_eq!(first_repeat, Some(CALENDAR_ROUND));
}

#[test]
fn calendar_round_period() {
    let haab = Haab::new(14, 10);
    let tzolkin = Tzolkin::new(11, 2);
    let day = Fixed(730_120);
    assert_eq!(Mayan::calendar_round_on_or_before(haab, tzolkin, day), Some(day));
    assert_eq!(
        Mayan::calendar_round_on_or_before(haab, tzolkin, day - 1),
        Some(day - CALENDAR_ROUND)
    );
    assert_eq!(
        Mayan::calendar_round_on_or_before(haab, Tzolkin::new(11, 3), day),
        None
    );
    for offset in [0, 1, 17, 365, 9_999] {
        let date = day + offset;
        assert_eq!(Mayan::haab_from_fixed(date), Mayan::haab_from_fixed(date + CALENDAR_ROUND));
        assert_eq!(
            Mayan::tzolkin_from_fixed(date),
            Mayan::tzolkin_from_fixed(date + CALENDAR_ROUND)
        );
    }
}

#[test]
fn hindu_consistency() {
    let valid = HinduLunarDate::new(136, 7, false, 1, true);
    let date = Date::<ModifiedHinduLunar>::new(valid).unwrap();
    assert_eq!(date.fixed(), Fixed(28_745));

    let invalid = HinduLunarDate::new(2056, 9, true, 25, false);
    assert!(matches!(
        Date::<ModifiedHinduLunar>::new(invalid),
        Err(CalendarError::InconsistentDate { .. })
    ));
}

#[test]
fn weekday_through_any_calendar() {
    let date = Date::<Hebrew>::from_fixed(Fixed(730_120));
    assert_eq!(date.weekday(), Weekday::Saturday);
    assert_eq!(date.k_day_after(Weekday::Sunday), Fixed(730_121));
    assert_eq!(
        Gregorian::nth_k_day(4, Weekday::Thursday, ymd(2000, 11, 1)),
        Ok(Fixed::from(NaiveDate::from_ymd_opt(2000, 11, 23).unwrap()))
    );
}

#[test]
fn chrono_interop() {
    let naive = NaiveDate::from_ymd_opt(1945, 11, 12).unwrap();
    let date = Date::<Persian>::from(naive);
    assert_eq!(*date.fields(), ymd(1324, 8, 21));
    assert_eq!(date.to_naive_date(), Some(naive));
}

#[test]
fn invalid_fields_render_as_invalid_date() {
    assert!(Date::<Gregorian>::new(ymd(2023, 2, 29)).is_err());
    assert_eq!(
        Date::<Gregorian>::from_fixed(Fixed(710_347)).to_string(),
        "12 November 1945"
    );
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_the_day_count() {
    let date = Date::<Gregorian>::from_fixed(Fixed(730_120));
    let json = serde_json::to_string(&date).unwrap();
    assert_eq!(json, "730120");
    let back: Date<Hebrew> = serde_json::from_str(&json).unwrap();
    assert_eq!(*back.fields(), ymd(5760, 10, 23));
}
