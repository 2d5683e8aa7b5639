use super::*;

#[test]
fn defaults_to_a_single_page() {
    let args = Args::try_parse_from(["viewer"]).expect("args");
    assert_eq!(args.mode(), Mode::Pages(1));
}

#[test]
fn page_count_must_be_positive() {
    assert!(Args::try_parse_from(["viewer", "--pages", "0"]).is_err());
    let args = Args::try_parse_from(["viewer", "--pages", "3"]).expect("args");
    assert_eq!(args.mode(), Mode::Pages(3));
}

#[test]
fn paging_modes_are_exclusive() {
    assert!(Args::try_parse_from(["viewer", "--pages", "2", "--all"]).is_err());
    assert!(Args::try_parse_from(["viewer", "--all", "--interactive"]).is_err());
    let args = Args::try_parse_from(["viewer", "--interactive"]).expect("args");
    assert_eq!(args.mode(), Mode::Interactive);
}
