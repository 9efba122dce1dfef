use anyhow::Result;
use construction_top6::{Company, Dataset, FigureBuilder};
use serde_json::{json, Value};
use std::io::Write;

const CSV: &str = "\
company,year,revenue,ebit,net_income_to_shareholders,market_capitalisation_31_dec,balance_sheet_tot_31_dec,equity_to_owner_31_dec,employees_31_dec,net_income_ratio,equity_ratio_31_dec,growth_revenue,growth_net_income,growth_equity,growth_market_capitalisation,country
vinci,2018,100,20,10,500,900,300,1000,10.0,33.3,,,,,FR
vinci,2019,110,22,12,600,950,320,1100,10.9,33.7,10.0,20.0,6.7,20.0,FR
acs,2019,80,8,4,200,700,100,1900,5.0,14.3,,,,,ES
";

#[test]
fn test_csv_to_dashboard_json() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(CSV.as_bytes())?;

    let dataset = Dataset::from_path(file.path())?;
    let figures = FigureBuilder::new(&dataset).build_all();
    let value: Value = serde_json::to_value(&figures)?;

    assert_eq!(value.as_array().unwrap().len(), 20);

    let revenue = &value[0];
    assert_eq!(revenue["layout"]["legend"]["y"], json!(1.19));
    assert_eq!(revenue["data"][0]["name"], json!("VINCI"));
    assert_eq!(revenue["data"][0]["x"], json!([2018, 2019]));
    assert_eq!(revenue["data"][0]["y"], json!([100.0, 110.0]));
    assert_eq!(revenue["data"][2]["x"], json!([]));

    let vinci_income = &value[2];
    assert_eq!(vinci_income["layout"]["legend"]["y"], json!(1.16));
    assert_eq!(vinci_income["data"][3]["line"]["dash"], json!("dot"));
    assert_eq!(vinci_income["data"][3]["y"], json!([500.0, 600.0]));

    let growth_revenue = &value[16];
    assert_eq!(growth_revenue["data"][0]["y"], json!([null, 10.0]));
    Ok(())
}

#[test]
fn test_balance_sheet_for_company_with_one_row() -> Result<()> {
    let dataset = Dataset::from_reader(CSV.as_bytes())?;
    let series = FigureBuilder::new(&dataset).balance_sheet(Company::Acs);

    assert_eq!(series.len(), 3);
    assert_eq!(series[0].y, vec![Some(700.0)]);
    assert_eq!(series[1].y, vec![Some(100.0)]);
    assert_eq!(series[2].y, vec![Some(200.0)]);
    Ok(())
}
