//! `weather` card for an already-fetched report.

use super::text::side_by_side;
use crate::content::WeatherReport;
use crate::session::celsius_to_fahrenheit;

const ICON_WIDTH: usize = 16;

/// Renders the report. The compact layout is plain lines for narrow screens;
/// the wide layout puts a condition icon beside the details.
pub fn build_weather_output(report: &WeatherReport, compact: bool) -> String {
    let temperature = format!(
        "{}°C / {}°F",
        report.temperature_c.round() as i64,
        celsius_to_fahrenheit(report.temperature_c)
    );
    let feels_like = report
        .feels_like_c
        .map(|c| format!("{}°C / {}°F", c.round() as i64, celsius_to_fahrenheit(c)));
    let wind = format!("{} km/h", report.wind_kph.round() as i64);

    if compact {
        let mut lines = vec![
            format!("Weather in {}", report.location),
            format!("  {temperature}  {}", report.condition),
        ];
        if let Some(feels_like) = feels_like {
            lines.push(format!("  Feels like {feels_like}"));
        }
        lines.push(format!("  Humidity {}%  Wind {wind}", report.humidity));
        return lines.join("\n");
    }

    let mut info = vec![
        format!("Weather in {}", report.location),
        format!("Condition:   {}", report.condition),
        format!("Temperature: {temperature}"),
    ];
    if let Some(feels_like) = feels_like {
        info.push(format!("Feels like:  {feels_like}"));
    }
    info.push(format!("Humidity:    {}%", report.humidity));
    info.push(format!("Wind:        {wind}"));

    side_by_side(condition_icon(&report.condition), &info, ICON_WIDTH)
}

/// Picks a small ASCII icon from keywords in the condition text.
fn condition_icon(condition: &str) -> &'static [&'static str] {
    let condition = condition.to_lowercase();
    if condition.contains("thunder") || condition.contains("storm") {
        &["    .--.", " .-(    ).", "(___.__)__)", "   ⚡ ⚡ ⚡"]
    } else if condition.contains("snow") {
        &["    .--.", " .-(    ).", "(___.__)__)", "  *  *  *"]
    } else if condition.contains("rain") || condition.contains("drizzle") {
        &["    .--.", " .-(    ).", "(___.__)__)", "  ' ' ' '"]
    } else if condition.contains("fog") || condition.contains("mist") || condition.contains("haze") {
        &[" _ - _ - _", "  _ - _ -", " _ - _ - _"]
    } else if condition.contains("cloud") || condition.contains("overcast") {
        &["    .--.", " .-(    ).", "(___.__)__)"]
    } else {
        &["   \\   /", "    .-.", " ― (   ) ―", "    `-'", "   /   \\"]
    }
}
