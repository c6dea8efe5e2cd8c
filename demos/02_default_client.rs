use oxr::{OxrError, RatesQuery};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app_id = std::env::var("OXR_APP_ID").unwrap_or_else(|_| "YOUR_APP_ID".to_string());

    // Calls without a client fail until a default is installed.
    assert!(matches!(oxr::get_currencies(None), Err(OxrError::NoClient)));

    oxr::init(app_id)?;

    let currencies = oxr::get_currencies(None)?;
    println!(
        "{} currencies available",
        currencies.as_object().map_or(0, |m| m.len())
    );

    match oxr::get_latest(&RatesQuery::new().base("EUR").symbols("USD"), None) {
        Ok(resp) => println!("EUR/USD: {}", resp["rates"]["USD"]),
        Err(OxrError::NotAllowed(_)) => println!("changing the base needs a paid plan"),
        Err(e) => return Err(e.into()),
    }

    oxr::reset();
    Ok(())
}
