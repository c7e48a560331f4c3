use num_format::{Locale, ToFormattedString};
use yew::{classes, html, Html};

use common::model::job::{JobResult, Tone};

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "tone-success",
        Tone::Warning => "tone-warning",
    }
}

fn card(label: &str, value: String, tone: Option<Tone>) -> Html {
    html! {
        <div class="stat-card">
            <div class="stat-label">{ label.to_string() }</div>
            <div class={classes!("stat-value", tone.map(tone_class))}>{ value }</div>
        </div>
    }
}

fn count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

/// Summary cards for the last ETL run, plus any rows the backend reported.
pub fn view(result: &JobResult) -> Html {
    html! {
        <div class="etl-stats">
            { card("Status", result.status_label().to_string(), Some(result.status_tone())) }
            { card("Read", count(result.read_count), None) }
            { card("Written", count(result.write_count), None) }
            { card("Skipped", count(result.skip_count), Some(result.skip_tone())) }
            { card("Duplicates", count(result.duplicate_count), None) }

            if !result.duplicates.is_empty() {
                <div class="etl-details">
                    <div class="stat-label">{"Duplicates skipped"}</div>
                    <ul>{ for result.duplicates.iter().map(|d| html! { <li>{ d.clone() }</li> }) }</ul>
                </div>
            }
            if !result.errors.is_empty() {
                <div class="etl-details tone-warning">
                    <div class="stat-label">{"Errors"}</div>
                    <ul>{ for result.errors.iter().map(|e| html! { <li>{ e.clone() }</li> }) }</ul>
                </div>
            }
        </div>
    }
}
