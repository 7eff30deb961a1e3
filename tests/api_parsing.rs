use restcountries_rs::models::{Country, RawCountry, map_countries_details};

#[test]
fn parse_sample_json() {
    let sample = r#"
    [
      {
        "name":{"common":"France"},
        "capital":["Paris"],
        "region":"Europe",
        "population":67000000,
        "flags":{"png":"url","alt":"flag"}
      },
      {
        "name":{"common":"San Marino"},
        "capital":["City of San Marino"],
        "region":"Europe",
        "population":33938,
        "flags":{"png":"https://flagcdn.com/w320/sm.png","alt":"The flag of San Marino"}
      }
    ]
    "#;

    let raw: Vec<RawCountry> = serde_json::from_str(sample).unwrap();
    assert_eq!(raw.len(), 2);

    let countries = map_countries_details(raw);
    let france = &countries[0];
    assert_eq!(france.name, "France");
    assert_eq!(france.capital, "Paris");
    assert_eq!(france.region, "Europe");
    assert_eq!(france.population, Some(67_000_000));
    assert_eq!(france.flag_image_url, "url");
    assert_eq!(france.flag_image_alt, "flag");
    assert_eq!(france.slug, "france");

    assert_eq!(countries[1].slug, "san-marino");
}

#[test]
fn country_from_raw_handles_null_fields() {
    // The API serializes absent optional values as nulls just as often as it
    // drops the key entirely; both must decode.
    let raw: RawCountry = serde_json::from_str(
        r#"
    {
      "name":null,
      "capital":null,
      "region":null,
      "population":null,
      "flags":null
    }"#,
    )
    .unwrap();
    let c = Country::from(raw);
    assert_eq!(c.name, "N/A");
    assert_eq!(c.capital, "N/A");
    assert_eq!(c.region, "N/A");
    assert_eq!(c.population, None);
    assert_eq!(c.flag_image_url, "N/A");
    assert_eq!(c.flag_image_alt, "N/A");
}
