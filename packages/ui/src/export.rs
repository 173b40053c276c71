//! CSV export of the expense history.

use api::Expense;

use crate::format::short_date_or_blank;

pub const EXPORT_FILENAME: &str = "splitpro-expenses.csv";

const HEADER: [&str; 7] = [
    "Date",
    "Description",
    "Category",
    "Paid By",
    "Amount",
    "Currency",
    "Group",
];

/// Render expenses as CSV, header first.
pub fn expenses_csv(expenses: &[Expense]) -> csv::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for expense in expenses {
        let date = short_date_or_blank(expense.occurred_at.as_ref().or(expense.created_at.as_ref()));
        let category = expense.category.unwrap_or_default();
        let amount = format!("{:.2}", expense.total_amount);
        writer.write_record([
            date.as_str(),
            expense.description.as_str(),
            category.display_name(),
            expense.payer_name.as_str(),
            amount.as_str(),
            expense.currency.as_str(),
            expense.group_name.as_deref().unwrap_or(""),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| {
        csv::Error::from(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Hand the CSV to the browser as a file download.
#[cfg(target_arch = "wasm32")]
pub fn download_csv(filename: &str, content: &str) -> Result<(), String> {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let describe = |e: JsValue| format!("{e:?}");

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())?;
    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(describe)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(describe)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(describe)?
        .dyn_into()
        .map_err(|_| "not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    Url::revoke_object_url(&url).map_err(describe)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn download_csv(filename: &str, content: &str) -> Result<(), String> {
    tracing::info!("Export of {} bytes to {filename} is only available in the browser", content.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::ExpenseCategory;
    use chrono::NaiveDate;

    fn expense(description: &str, amount: f64) -> Expense {
        Expense {
            id: "e1".to_string(),
            description: description.to_string(),
            total_amount: amount,
            currency: "USD".to_string(),
            payer_id: "u1".to_string(),
            payer_name: "Ada".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 3, 5)
                .unwrap()
                .and_hms_opt(12, 0, 0),
            category: Some(ExpenseCategory::Food),
            ..Default::default()
        }
    }

    #[test]
    fn test_header_only_when_empty() {
        let csv = expenses_csv(&[]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            ["Date,Description,Category,Paid By,Amount,Currency,Group"]
        );
    }

    #[test]
    fn test_rows_are_quoted_when_needed() {
        let mut shared = expense("Pizza, drinks", 42.5);
        shared.group_name = Some("Flat 3".to_string());
        let csv = expenses_csv(&[shared, expense("Taxi", 12.0)]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "3/5/2024,\"Pizza, drinks\",Food & Dining,Ada,42.50,USD,Flat 3"
        );
        assert_eq!(lines[2], "3/5/2024,Taxi,Food & Dining,Ada,12.00,USD,");
    }

    #[test]
    fn test_occurred_at_preferred_over_created_at() {
        let mut e = expense("Rent", 900.0);
        e.occurred_at = NaiveDate::from_ymd_opt(2024, 1, 31)
            .unwrap()
            .and_hms_opt(0, 0, 0);
        e.category = None;
        let csv = expenses_csv(&[e]).unwrap();
        assert!(csv.lines().nth(1).unwrap().starts_with("1/31/2024,Rent,General,"));
    }
}
