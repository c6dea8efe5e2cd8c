use oxr::{OxrClient, OxrError, RatesQuery};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let app_id = std::env::var("OXR_APP_ID").unwrap_or_else(|_| "YOUR_APP_ID".to_string());
    let client = OxrClient::new(app_id)?;

    // 1. Latest rates for a couple of currencies.
    let query = RatesQuery::new().symbols(["EUR", "GBP", "JPY"]);
    let latest = client.latest(&query)?;
    println!("--- Latest (base {}) ---", latest["base"]);
    for (code, rate) in latest["rates"].as_object().into_iter().flatten() {
        println!("{code}: {rate}");
    }
    println!();

    // 2. End-of-day rates for a fixed date.
    let day = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).ok_or("bad date")?;
    let historical = client.historical(day, &query)?;
    println!("--- {day} ---");
    println!("EUR: {}", historical["rates"]["EUR"]);
    println!();

    // 3. Plan-restricted features fail with a typed error.
    match client.convert(100, "EUR", "USD") {
        Ok(resp) => println!("100 EUR = {} USD", resp["response"]),
        Err(OxrError::NotAllowed(x)) => {
            println!("convert is not available on this plan ({})", x.response.status)
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
