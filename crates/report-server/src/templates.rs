//! HTML form template
//!
//! The form is embedded in the binary and rendered with MiniJinja so the
//! currency list stays in one place (the `Currency` enum).

use minijinja::{Environment, context};
use report_core::Currency;

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Currency Report Generator</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
    form { display: grid; gap: 0.75rem; max-width: 24rem; }
    label { font-weight: 600; }
    button { padding: 0.5rem 1rem; cursor: pointer; }
    #error { color: #b00020; margin-top: 1rem; }
    #report { white-space: pre-wrap; background: #f6f6f6; padding: 1rem; margin-top: 1rem; }
  </style>
</head>
<body>
  <h1>Currency Report Generator</h1>
  <form id="report-form">
    <label for="currency">Currency pair</label>
    <select id="currency" name="currency">
      {% for currency in currencies %}
      <option value="{{ currency }}">{{ currency }}</option>
      {% endfor %}
    </select>
    <label for="start_date">Start date</label>
    <input type="date" id="start_date" name="start_date">
    <label for="end_date">End date</label>
    <input type="date" id="end_date" name="end_date">
    <button type="submit">Generate report</button>
  </form>
  <p id="error" hidden></p>
  <section id="result" hidden>
    <pre id="report"></pre>
    <button id="download">Download PDF</button>
  </section>
  <script>
    const form = document.getElementById('report-form');
    const errorBox = document.getElementById('error');
    const result = document.getElementById('result');
    let lastReport = null;

    form.addEventListener('submit', async (event) => {
      event.preventDefault();
      errorBox.hidden = true;
      result.hidden = true;
      const response = await fetch('/generate_report', {
        method: 'POST',
        headers: { 'Content-Type': 'application/x-www-form-urlencoded' },
        body: new URLSearchParams(new FormData(form)),
      });
      const data = await response.json();
      if (!response.ok) {
        errorBox.textContent = data.error;
        errorBox.hidden = false;
        return;
      }
      lastReport = data;
      document.getElementById('report').textContent = data.report;
      result.hidden = false;
    });

    document.getElementById('download').addEventListener('click', async () => {
      if (!lastReport) return;
      const response = await fetch('/download_pdf', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({
          report: lastReport.report,
          currency: lastReport.currency,
          start_date: lastReport.start_date,
          end_date: lastReport.end_date,
        }),
      });
      if (!response.ok) {
        const data = await response.json();
        errorBox.textContent = data.error;
        errorBox.hidden = false;
        return;
      }
      const blob = await response.blob();
      const link = document.createElement('a');
      link.href = URL.createObjectURL(blob);
      link.download = `currency_report_${lastReport.currency}_${lastReport.start_date}_to_${lastReport.end_date}.pdf`;
      link.click();
      URL.revokeObjectURL(link.href);
    });
  </script>
</body>
</html>
"##;

/// Render the input form with the supported currency list.
pub fn render_index() -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("index.html", INDEX_HTML)?;
    let currencies: Vec<&str> = Currency::ALL.iter().map(|c| c.code()).collect();
    env.get_template("index.html")?
        .render(context! { currencies => currencies })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_lists_every_currency() {
        let html = render_index().unwrap();
        for currency in Currency::ALL {
            assert!(html.contains(currency.code()), "missing {currency}");
        }
    }

    #[test]
    fn test_index_posts_to_report_endpoints() {
        let html = render_index().unwrap();
        assert!(html.contains("/generate_report"));
        assert!(html.contains("/download_pdf"));
    }
}
