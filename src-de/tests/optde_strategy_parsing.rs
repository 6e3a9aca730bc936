use hyperopt_de::Strategy;

#[test]
fn test_parse_strategy_variants() {
	assert!(matches!("best1bin".parse::<Strategy>().unwrap(), Strategy::Best1Bin));
	assert!(matches!("Rand1Bin".parse::<Strategy>().unwrap(), Strategy::Rand1Bin));
	assert!(matches!(
		"currenttobest1bin".parse::<Strategy>().unwrap(),
		Strategy::CurrentToBest1Bin
	));
	assert_eq!("randtobest1exp".parse::<Strategy>().unwrap_err(), "unknown strategy: randtobest1exp");
}
