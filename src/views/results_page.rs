use axum::http::StatusCode;

use crate::services::recommender::recommender_service::RecommendationOutput;

const RESULTS_PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Recommended Hospitals</title>
    <style>
        body {
            font-family: 'Noto Sans KR', sans-serif;
            margin: 40px;
            background-color: #f5f5f5;
        }
        .result-container {
            background-color: white;
            padding: 20px;
            border-radius: 10px;
            box-shadow: 0 0 15px rgba(0, 0, 0, 0.1);
        }
        .summary-box {
            background-color: #e3f2fd;
            padding: 15px;
            border-radius: 8px;
            margin-bottom: 20px;
        }
        .keywords {
            color: #1976d2;
            margin-top: 10px;
        }
        table {
            width: 100%;
            border-collapse: collapse;
            margin-top: 20px;
        }
        th {
            background-color: #2c3e50;
            color: white;
            padding: 12px;
            text-align: left;
        }
        td {
            padding: 12px;
            border-bottom: 1px solid #e0e0e0;
        }
        tr:nth-child(even) {
            background-color: #f8f9fa;
        }
        tr:hover {
            background-color: #f1f3f5;
        }
        .distance, .duration {
            color: #3498db;
            font-weight: bold;
        }
        .arrival-time {
            color: #e74c3c;
            font-weight: bold;
        }
    </style>
    <link href="https://fonts.googleapis.com/css2?family=Noto+Sans+KR:wght@400;500;700&display=swap" rel="stylesheet">
</head>
<body>
    <div class="result-container">
"#;

const RESULTS_PAGE_FOOT: &str = r#"        </table>
    </div>
</body>
</html>
"#;

/// Minimal entity escaping. Every engine-supplied field passes through here
/// before being interpolated into markup.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Results document: summary block plus one table row per hospital, numbered
/// 1..N in the order the engine returned them.
pub fn render_results_page(result: &RecommendationOutput) -> String {
    let mut html = String::from(RESULTS_PAGE_HEAD);

    html.push_str(&format!(
        r#"        <div class="summary-box">
            <h3>Emergency Summary</h3>
            <p>{}</p>
            <p class="keywords">Keywords: {}</p>
        </div>
        <h2>Recommended Hospitals</h2>
        <table>
            <tr>
                <th>#</th>
                <th>Hospital</th>
                <th>Address</th>
                <th>Phone</th>
                <th>Distance</th>
                <th>Duration</th>
                <th>Arrival</th>
            </tr>
"#,
        escape_html(&result.summary),
        escape_html(&result.keywords)
    ));

    for (i, hospital) in result.hospitals.iter().enumerate() {
        html.push_str(&format!(
            r#"            <tr>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
                <td class="distance">{} km</td>
                <td class="duration">{}</td>
                <td class="arrival-time">{}</td>
            </tr>
"#,
            i + 1,
            escape_html(&hospital.name),
            escape_html(&hospital.address),
            escape_html(&hospital.phone),
            escape_html(&hospital.distance_km),
            escape_html(&hospital.duration),
            escape_html(&hospital.arrival_time)
        ));
    }

    html.push_str(RESULTS_PAGE_FOOT);
    html
}

pub fn render_error_page(code: StatusCode, message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{code}</title>
    <style>
        body {{
            font-family: 'Noto Sans KR', sans-serif;
            margin: 40px;
            background-color: #f5f5f5;
        }}
        .error-box {{
            background-color: white;
            padding: 20px;
            border-radius: 10px;
            box-shadow: 0 0 15px rgba(0, 0, 0, 0.1);
        }}
        h2 {{
            color: #e74c3c;
        }}
    </style>
</head>
<body>
    <div class="error-box">
        <h2>{code}</h2>
        <p>{message}</p>
    </div>
</body>
</html>
"#,
        code = code,
        message = escape_html(message)
    )
}
