use std::env;
use minirules::prelude::*;
use polars::prelude::*;


fn symptoms() -> DataAnalyzer {
    let mut path = env::current_dir().unwrap();
    path.push("tests/dataset/symptoms.csv");
    DataAnalyzer::from_csv(path).unwrap()
}


#[test]
fn symptoms_counts() {
    let analysis = symptoms().analyze_data().unwrap();
    let counts = &analysis.counts;

    assert_eq!(counts.attributes(), vec!["fever", "cough", "fatigue", "rash"]);
    assert_eq!(counts.at("fever", "positive", "positive"), Some(&4));
    assert_eq!(counts.at("fever", "positive", "negative"), Some(&1));
    assert_eq!(counts.at("fever", "negative", "positive"), Some(&2));
    assert_eq!(counts.at("fever", "negative", "negative"), Some(&3));
    assert_eq!(counts.at("rash", "positive", "positive"), Some(&1));
    assert_eq!(counts.at("rash", "negative", "positive"), Some(&5));
    assert_eq!(counts.at("rash", "unknown", "positive"), None);
}


#[test]
fn symptoms_proportions() {
    let analysis = symptoms().analyze_data().unwrap();
    let prop = &analysis.proportions;

    assert_eq!(prop.at("fever", "positive", "positive"), Some(&40.0));
    assert_eq!(prop.at("fever", "positive", "negative"), Some(&10.0));
    assert_eq!(prop.at("fever", "negative", "positive"), Some(&20.0));
    assert_eq!(prop.at("fever", "negative", "negative"), Some(&30.0));
}


#[test]
fn symptoms_report_text() {
    let analyzer = symptoms();
    let report = analyzer.report(0.07).unwrap();
    let text = report.to_string();

    assert!(text.contains("Attribute: fever\n  negative: {negative: 3, positive: 2}\n"));
    assert!(text.contains("Rule 1: If fever then diagnosis\nRule 2: If cough then diagnosis\n"));
}


#[test]
fn dataframe_counts() {
    let id = Series::new("id", &[1_i64, 2, 3, 4]);
    let a = Series::new("A", &["positive", "positive", "negative", "negative"]);
    let class = Series::new(
        "class", &["positive", "positive", "negative", "negative"]
    );
    let df = DataFrame::new(vec![id, a, class]).unwrap();
    let sample = Sample::from_dataframe(df).unwrap();

    let counts = count_attributes(&sample, sample.attributes(), "class")
        .unwrap();
    assert_eq!(counts.at("A", "positive", "positive"), Some(&2));
    assert_eq!(counts.at("A", "positive", "negative"), Some(&0));
    assert_eq!(counts.at("A", "negative", "positive"), Some(&0));
    assert_eq!(counts.at("A", "negative", "negative"), Some(&2));

    let rules = discover_rules(&sample, 0.5).unwrap();
    assert_eq!(rules, vec![Rule::new("A", "class")]);
}


#[test]
fn headerless_file() {
    let mut path = env::current_dir().unwrap();
    path.push("tests/dataset/no_header.csv");

    let sample = SampleReader::default()
        .file(path)
        .has_header(false)
        .read()
        .unwrap();
    assert_eq!(sample.shape(), (3, 3));
    assert_eq!(sample.attributes(), &["Feat. [2]"]);
    assert_eq!(sample.class_label(), "Feat. [3]");

    let counts = count_attributes(&sample, sample.attributes(), sample.class_label())
        .unwrap();
    assert_eq!(counts.at("Feat. [2]", "positive", "negative"), Some(&1));
}


#[test]
fn empty_table_has_no_data() {
    let rows: Vec<Vec<&str>> = Vec::new();
    let sample = Sample::from_rows(["id", "A", "class"], rows).unwrap();
    let analyzer = DataAnalyzer::new(sample);

    let err = analyzer.analyze_data().unwrap_err();
    assert!(matches!(err, MiniRulesError::NoData));
    assert!(analyzer.discover_rules(0.5).unwrap().is_empty());
}
