use restcountries_rs::models::{CountryDetails, RawCountryDetails};

#[test]
fn parse_detail_sample() {
    let sample = r#"
    {
      "name":{
        "common":"France",
        "nativeName":{"fra":{"official":"République française","common":"France"}}
      },
      "capital":["Paris"],
      "region":"Europe",
      "subregion":"Western Europe",
      "population":67391582,
      "tld":[".fr"],
      "currencies":{"EUR":{"name":"Euro","symbol":"€"}},
      "languages":{"fra":"French"},
      "borders":["AND","BEL","DEU","ESP","ITA","LUX","MCO","CHE"],
      "flags":{"png":"https://flagcdn.com/w320/fr.png","alt":"The flag of France"}
    }
    "#;

    let raw: RawCountryDetails = serde_json::from_str(sample).unwrap();
    let d = CountryDetails::from(raw);
    assert_eq!(d.name_common, "France");
    assert_eq!(d.name_native, "France");
    assert_eq!(d.capital, "Paris");
    assert_eq!(d.region, "Europe");
    assert_eq!(d.sub_region, "Western Europe");
    assert_eq!(d.population, Some(67_391_582));
    assert_eq!(d.top_level_domain, ".fr");
    assert_eq!(d.currencies, ["Euro"]);
    assert_eq!(d.languages, ["French"]);
    assert_eq!(d.bordering_countries.len(), 8);
    assert_eq!(d.slug, "france");
    assert_eq!(d.display_population(), "67,391,582");
}

#[test]
fn multi_currency_names_come_out_sorted_by_code() {
    let raw: RawCountryDetails = serde_json::from_str(
        r#"
    {
      "name":{"common":"Zimbabwe"},
      "currencies":{
        "ZWL":{"name":"Zimbabwean dollar","symbol":"$"},
        "USD":{"name":"United States dollar","symbol":"$"},
        "BWP":{"name":"Botswana pula","symbol":"P"}
      }
    }"#,
    )
    .unwrap();
    let d = CountryDetails::from(raw);
    assert_eq!(
        d.currencies,
        [
            "Botswana pula",
            "United States dollar",
            "Zimbabwean dollar"
        ]
    );
}

#[test]
fn sparse_detail_record_degrades_to_sentinels() {
    let raw: RawCountryDetails = serde_json::from_str(r#"{"name":{"common":"Tuvalu"}}"#).unwrap();
    let d = CountryDetails::from(raw);
    assert_eq!(d.name_native, "N/A");
    assert_eq!(d.sub_region, "N/A");
    assert_eq!(d.top_level_domain, "N/A");
    assert!(d.currencies.is_empty());
    assert!(d.languages.is_empty());
    assert!(d.bordering_countries.is_empty());
    assert_eq!(d.display_population(), "N/A");
}

#[test]
fn native_name_falls_back_to_official() {
    let raw: RawCountryDetails = serde_json::from_str(
        r#"
    {
      "name":{
        "common":"Examplia",
        "nativeName":{"exa":{"official":"Republic of Examplia"}}
      }
    }"#,
    )
    .unwrap();
    let d = CountryDetails::from(raw);
    assert_eq!(d.name_native, "Republic of Examplia");
}
