/// The landing form. Submits via GET to the recommendations endpoint; the
/// background image resolves against the static asset route.
pub const FORM_PAGE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Hospital Finder</title>
    <style>
        body {
            font-family: 'Noto Sans KR', sans-serif;
            margin: 0;
            padding: 0;
            background-color: #f5f5f5;
            display: flex;
            justify-content: center;
            align-items: center;
            min-height: 100vh;
            background-image: url('/static/background.png');
            background-size: 2200px;
            background-position: center;
            background-repeat: no-repeat;
            background-attachment: fixed;
        }
        .container {
            background-color: white;
            padding: 40px;
            border-radius: 20px;
            box-shadow: 0 0 20px rgba(0, 0, 0, 0.1);
            width: 400px;
        }
        h1 {
            color: #2c3e50;
            text-align: center;
            margin-bottom: 30px;
            font-size: 28px;
        }
        .form-group {
            margin-bottom: 25px;
        }
        label {
            display: block;
            margin-bottom: 8px;
            color: #34495e;
            font-weight: bold;
            font-size: 14px;
        }
        input {
            width: 100%;
            padding: 12px;
            border: 2px solid #e0e0e0;
            border-radius: 8px;
            font-size: 14px;
            transition: border-color 0.3s ease;
            box-sizing: border-box;
        }
        input:focus {
            border-color: #3498db;
            outline: none;
        }
        button {
            width: 100%;
            padding: 14px;
            background-color: #3498db;
            color: white;
            border: none;
            border-radius: 8px;
            cursor: pointer;
            font-size: 16px;
            font-weight: bold;
            transition: background-color 0.3s ease;
        }
        button:hover {
            background-color: #2980b9;
        }
    </style>
    <link href="https://fonts.googleapis.com/css2?family=Noto+Sans+KR:wght@400;500;700&display=swap" rel="stylesheet">
</head>
<body>
    <div class="container">
        <h1>Hospital Finder</h1>
        <form action="/hospital/hospital_by_module" method="get">
            <div class="form-group">
                <label>Emergency description</label>
                <input type="text" name="request" placeholder="Describe the emergency" required>
            </div>
            <div class="form-group">
                <label>Latitude</label>
                <input type="number" step="any" name="latitude" placeholder="Your latitude" required>
            </div>
            <div class="form-group">
                <label>Longitude</label>
                <input type="number" step="any" name="longitude" placeholder="Your longitude" required>
            </div>
            <div class="form-group">
                <label>How many emergency rooms should we suggest?</label>
                <input type="number" step="1" min="0" name="count" placeholder="Number of results" required>
            </div>
            <button type="submit">Find hospitals</button>
        </form>
    </div>
</body>
</html>
"#;
