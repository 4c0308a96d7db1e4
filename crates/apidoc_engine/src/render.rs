use chrono::{Datelike, Local};

use crate::model::{ApiSpec, Endpoint, ErrorCode, Parameter, Response};

/* # Why is the template inlined as string chunks?

The emitted document must match the legacy generator byte for byte,
including indentation and trailing whitespace inside the template. A
templating engine would normalize some of that away; push_str over literal
chunks keeps every byte under direct control and keeps rendering a pure,
infallible function.
*/

/// The moment a document is rendered at, as it appears in the footer.
///
/// Splitting this out of the renderer keeps `render_document` fully
/// deterministic: two renders with identical inputs and the same moment are
/// byte-identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderMoment {
    /// Date formatted like the legacy tool: `M/D/YYYY`, no zero padding.
    pub date: String,
    /// Four-digit year.
    pub year: String,
}

impl RenderMoment {
    /// Captures the current local time.
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            date: now.format("%-m/%-d/%Y").to_string(),
            year: now.year().to_string(),
        }
    }
}

/// Inline style for the method badge. Fixed lookup keyed on the exact
/// method string; anything unrecognized gets the GET style.
pub fn method_badge_style(method: &str) -> &'static str {
    match method {
        "POST" => "background: #cce5ff; color: #004085; border: 1px solid #b3d7ff;",
        "PUT" => "background: #fff3cd; color: #856404; border: 1px solid #ffeaa7;",
        "DELETE" => "background: #f8d7da; color: #721c24; border: 1px solid #f5c6cb;",
        "PATCH" => "background: #e2e3e5; color: #383d41; border: 1px solid #d6d8db;",
        // GET and everything else
        _ => "background: #d4edda; color: #155724; border: 1px solid #c3e6cb;",
    }
}

/// Visual bucket a status code lands in.
///
/// The emitted stylesheet colors exactly the classes `status-200/201`
/// (success), `status-400/404` (warning) and `status-500` (error); any other
/// status renders with no special background. The mapping is literal string
/// matching with no trimming or normalization, so `"201 "` with a trailing
/// space does not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Warning,
    Error,
    Plain,
}

/// Maps a status string to its visual bucket.
pub fn status_tone(status: &str) -> StatusTone {
    match status {
        "200" | "201" => StatusTone::Success,
        "400" | "404" => StatusTone::Warning,
        "500" => StatusTone::Error,
        _ => StatusTone::Plain,
    }
}

/// File name the rendered document is saved under: the title lowercased
/// with each whitespace run collapsed to a hyphen, plus
/// `-documentation.html`.
pub fn output_file_name(title: &str) -> String {
    let mut name = String::new();
    let mut in_whitespace = false;
    for ch in title.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                name.push('-');
                in_whitespace = true;
            }
        } else {
            in_whitespace = false;
            name.extend(ch.to_lowercase());
        }
    }
    name.push_str("-documentation.html");
    name
}

/// Renders a complete, self-contained HTML document for the given
/// description. Pure and infallible; all user text is interpolated verbatim.
///
/// No escaping is applied. That reproduces the legacy generator's observable
/// output exactly and is a documented correctness gap, not an oversight:
/// markup in user-entered text ends up in the document as markup.
pub fn render_document(spec: &ApiSpec, moment: &RenderMoment) -> String {
    let api = &spec.api_info;
    let auth = &spec.auth_info;
    let mut buffer = String::with_capacity(16 * 1024);
    let out = &mut buffer;
    out.push_str(r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>"#);
    out.push_str(&api.title);
    out.push_str(r#"</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }
        
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            line-height: 1.6;
            color: #333;
            background: #f8f9fa;
        }
        
        .container {
            max-width: 1200px;
            margin: 0 auto;
            padding: 20px;
            background: white;
            min-height: 100vh;
        }
        
        .header {
            text-align: center;
            margin-bottom: 40px;
            padding-bottom: 20px;
            border-bottom: 3px solid #007bff;
        }
        
        .header h1 {
            color: #007bff;
            font-size: 2.5em;
            margin-bottom: 10px;
        }
        
        .header .subtitle {
            color: #6c757d;
            font-size: 1.2em;
            margin-bottom: 10px;
        }
        
        .version-badge {
            display: inline-block;
            background: #28a745;
            color: white;
            padding: 5px 15px;
            border-radius: 20px;
            font-size: 0.9em;
            margin-top: 10px;
        }
        
        .section {
            margin-bottom: 40px;
            page-break-inside: avoid;
        }
        
        .section h2 {
            color: #007bff;
            font-size: 1.8em;
            margin-bottom: 20px;
            padding-bottom: 10px;
            border-bottom: 2px solid #e9ecef;
        }
        
        .section h3 {
            color: #495057;
            font-size: 1.3em;
            margin-bottom: 15px;
            margin-top: 25px;
        }
        
        .info-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
            gap: 20px;
            margin: 20px 0;
        }
        
        .info-card {
            background: #f8f9fa;
            padding: 20px;
            border-radius: 8px;
            border-left: 4px solid #007bff;
        }
        
        .info-card h4 {
            color: #007bff;
            margin-bottom: 10px;
        }
        
        .code-block {
            background: #2d3748;
            color: #e2e8f0;
            padding: 15px;
            border-radius: 6px;
            font-family: 'Courier New', monospace;
            font-size: 0.9em;
            overflow-x: auto;
            margin: 10px 0;
        }
        
        .endpoint {
            background: white;
            border: 1px solid #dee2e6;
            border-radius: 8px;
            margin-bottom: 25px;
            overflow: hidden;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        
        .endpoint-header {
            background: #f8f9fa;
            padding: 20px;
            border-bottom: 1px solid #dee2e6;
        }
        
        .endpoint-title {
            display: flex;
            align-items: center;
            gap: 15px;
            margin-bottom: 10px;
            flex-wrap: wrap;
        }
        
        .method-badge {
            padding: 8px 12px;
            border-radius: 4px;
            font-weight: bold;
            font-size: 0.8em;
            text-transform: uppercase;
        }
        
        .endpoint-path {
            font-family: 'Courier New', monospace;
            font-size: 1.1em;
            color: #495057;
            background: white;
            padding: 5px 10px;
            border-radius: 4px;
            border: 1px solid #dee2e6;
        }
        
        .endpoint-content {
            padding: 20px;
        }
        
        .params-table {
            width: 100%;
            border-collapse: collapse;
            margin: 15px 0;
        }
        
        .params-table th {
            background: #f8f9fa;
            padding: 12px;
            text-align: left;
            border: 1px solid #dee2e6;
            font-weight: 600;
            color: #495057;
        }
        
        .params-table td {
            padding: 10px 12px;
            border: 1px solid #dee2e6;
            vertical-align: top;
        }
        
        .params-table tr:nth-child(even) {
            background: #f8f9fa;
        }
        
        .required {
            color: #dc3545;
            font-weight: bold;
        }
        
        .optional {
            color: #6c757d;
        }
        
        .response-example {
            background: #2d3748;
            color: #e2e8f0;
            padding: 15px;
            border-radius: 6px;
            font-family: 'Courier New', monospace;
            font-size: 0.85em;
            overflow-x: auto;
            white-space: pre-wrap;
            margin: 10px 0;
        }
        
        .status-code {
            font-weight: bold;
            padding: 5px 10px;
            border-radius: 4px;
            font-family: 'Courier New', monospace;
            display: inline-block;
            margin-bottom: 10px;
        }
        
        .status-200, .status-201 { background: #d4edda; color: #155724; }
        .status-400, .status-404 { background: #fff3cd; color: #856404; }
        .status-500 { background: #f8d7da; color: #721c24; }
        
        .error-section {
            background: #f8f9fa;
            padding: 20px;
            border-radius: 8px;
            margin: 15px 0;
        }
        
        .error-item {
            background: white;
            border: 1px solid #dee2e6;
            border-radius: 6px;
            padding: 15px;
            margin-bottom: 15px;
        }
        
        .error-header {
            display: flex;
            align-items: center;
            gap: 10px;
            margin-bottom: 10px;
        }
        
        .alert {
            padding: 15px;
            margin: 20px 0;
            border-radius: 6px;
            border-left: 4px solid;
        }
        
        .alert-info {
            background: #d1ecf1;
            border-color: #17a2b8;
            color: #0c5460;
        }
        
        .alert-warning {
            background: #fff3cd;
            border-color: #ffc107;
            color: #856404;
        }
        
        .features-list {
            list-style: none;
            padding: 0;
        }
        
        .features-list li {
            padding: 8px 0;
            padding-left: 25px;
            position: relative;
        }
        
        .features-list li:before {
            content: "✓";
            position: absolute;
            left: 0;
            color: #28a745;
            font-weight: bold;
        }
        
        /* Print Styles */
        @media print {
            body {
                background: white !important;
                font-size: 12pt;
                line-height: 1.4;
            }
            
            .container {
                max-width: none;
                padding: 0;
                background: white;
            }
            
            .section {
                page-break-inside: avoid;
                margin-bottom: 30px;
            }
            
            .endpoint {
                page-break-inside: avoid;
                box-shadow: none;
                border: 1px solid #000;
            }
            
            .code-block, .response-example {
                background: #f8f9fa !important;
                color: #000 !important;
                border: 1px solid #dee2e6;
            }
        }
    </style>
</head>
<body>
    <div class="container">
        <!-- Header -->
        <div class="header">
            <h1>"#);
    out.push_str(&api.title);
    out.push_str(r#"</h1>
            <div class="subtitle">"#);
    out.push_str(&api.description);
    out.push_str(r#"</div>
            <span class="version-badge">Version "#);
    out.push_str(&api.version);
    out.push_str(r#"</span>
        </div>

        <!-- Overview Section -->
        <div class="section">
            <h2>API Overview</h2>
            <p>Welcome to our comprehensive API documentation. This REST API provides robust functionality with full CRUD operations, authentication, and comprehensive error handling.</p>
            
            <div class="info-grid">
                <div class="info-card">
                    <h4>Base URL</h4>
                    <div class="code-block">"#);
    out.push_str(&api.base_url);
    out.push_str(r#"</div>
                </div>
                <div class="info-card">
                    <h4>Response Format</h4>
                    <div class="code-block">application/json</div>
                </div>
                <div class="info-card">
                    <h4>Contact</h4>
                    <p>"#);
    out.push_str(&api.contact_email);
    out.push_str(r#"</p>
                </div>
                <div class="info-card">
                    <h4>Company</h4>
                    <p>"#);
    out.push_str(&api.company_name);
    out.push_str(r#"</p>
                </div>
            </div>

            <h3>Key Features</h3>
            <ul class="features-list">
                <li>RESTful API design principles</li>
                <li>JSON request and response format</li>
                <li>Comprehensive error handling</li>
                <li>Rate limiting and security measures</li>
                <li>Pagination support for large datasets</li>
            </ul>
        </div>

        <!-- Authentication Section -->
        <div class="section">
            <h2>Authentication</h2>
            <div class="alert alert-info">
                <h3>"#);
    out.push_str(&auth.auth_type);
    out.push_str(r"</h3>
                <p>");
    out.push_str(&auth.description);
    out.push_str(r#"</p>
                <div class="code-block">"#);
    out.push_str(&auth.example);
    out.push_str(r#"</div>
            </div>
            <div class="alert alert-warning">
                <strong>Security Note:</strong> "#);
    out.push_str(&auth.notes);
    out.push_str(r#"
            </div>
        </div>

        <!-- Endpoints Section -->
        <div class="section">
            <h2>API Endpoints</h2>
            <p>Complete list of available endpoints with detailed information about parameters, responses, and examples.</p>
            
            "#);
    for endpoint in &spec.endpoints {
        render_endpoint(out, endpoint);
    }
    out.push_str(r#"
        </div>

        <!-- Error Codes Section -->
        <div class="section">
            <h2>Error Codes</h2>
            <p>The API uses standard HTTP status codes to indicate the success or failure of requests.</p>
            
            <div class="error-section">
                "#);
    for error in &spec.error_codes {
        render_error_code(out, error);
    }
    out.push_str(r#"
            </div>
        </div>

        <!-- Footer -->
        <div style="text-align: center; margin-top: 40px; padding-top: 20px; border-top: 1px solid #dee2e6; color: #6c757d;">
            <p>Generated on "#);
    out.push_str(&moment.date);
    out.push_str(r"</p>
            <p>© ");
    out.push_str(&moment.year);
    out.push_str(r" ");
    out.push_str(&api.company_name);
    out.push_str(r". All rights reserved.</p>
        </div>
    </div>
</body>
</html>");
    buffer
}

fn render_endpoint(out: &mut String, endpoint: &Endpoint) {
    out.push_str(r#"
                <div class="endpoint">
                    <div class="endpoint-header">
                        <div class="endpoint-title">
                            <span class="method-badge" style=""#);
    out.push_str(method_badge_style(&endpoint.method));
    out.push_str(r#"">"#);
    out.push_str(&endpoint.method);
    out.push_str(r#"</span>
                            <code class="endpoint-path">"#);
    out.push_str(&endpoint.path);
    out.push_str(r"</code>
                            <span>");
    out.push_str(&endpoint.title);
    out.push_str(r"</span>
                        </div>
                        <p>");
    out.push_str(&endpoint.description);
    out.push_str(r#"</p>
                    </div>
                    
                    <div class="endpoint-content">
                        <h3>Parameters</h3>
                        <table class="params-table">
                            <thead>
                                <tr>
                                    <th>Name</th>
                                    <th>Type</th>
                                    <th>Required</th>
                                    <th>Description</th>
                                </tr>
                            </thead>
                            <tbody>
                                "#);
    for param in &endpoint.parameters {
        render_parameter(out, param);
    }
    out.push_str(r"
                            </tbody>
                        </table>
                        
                        <h3>Responses</h3>
                        ");
    for response in &endpoint.responses {
        render_response(out, response);
    }
    out.push_str(r"
                    </div>
                </div>
            ");
}

fn render_parameter(out: &mut String, param: &Parameter) {
    out.push_str(r"
                                    <tr>
                                        <td><code>");
    out.push_str(&param.name);
    out.push_str(r"</code></td>
                                        <td>");
    out.push_str(&param.param_type);
    out.push_str(r#"</td>
                                        <td class=""#);
    out.push_str(if param.required { "required" } else { "optional" });
    out.push_str(r#"">"#);
    out.push_str(if param.required { "Yes" } else { "No" });
    out.push_str(r"</td>
                                        <td>");
    out.push_str(&param.description);
    out.push_str(r"</td>
                                    </tr>
                                ");
}

fn render_response(out: &mut String, response: &Response) {
    out.push_str(r#"
                            <div>
                                <span class="status-code status-"#);
    out.push_str(&response.status);
    out.push_str(r#"">"#);
    out.push_str(&response.status);
    out.push_str(r"</span>
                                <span>");
    out.push_str(&response.description);
    out.push_str(r#"</span>
                                <div class="response-example">"#);
    out.push_str(&response.example);
    out.push_str(r"</div>
                            </div>
                        ");
}

fn render_error_code(out: &mut String, error: &ErrorCode) {
    out.push_str(r#"
                    <div class="error-item">
                        <div class="error-header">
                            <span class="status-code status-"#);
    out.push_str(&error.code);
    out.push_str(r#"">"#);
    out.push_str(&error.code);
    out.push_str(r"</span>
                            <strong>");
    out.push_str(&error.error_type);
    out.push_str(r"</strong>
                        </div>
                        <p><strong>Message:</strong> ");
    out.push_str(&error.message);
    out.push_str(r"</p>
                        <p><strong>Description:</strong> ");
    out.push_str(&error.description);
    out.push_str(r#"</p>
                        <div class="code-block">{
  "error": {
    "code": "#);
    out.push_str(&error.code);
    out.push_str(r#",
    "type": ""#);
    out.push_str(&error.error_type);
    out.push_str(r#"",
    "message": ""#);
    out.push_str(&error.message);
    out.push_str(r#""
  }
}</div>
                    </div>
                "#);
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect_file;

    fn fixed_moment() -> RenderMoment {
        RenderMoment {
            date: "1/15/2024".to_string(),
            year: "2024".to_string(),
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let spec = ApiSpec::sample();
        let moment = fixed_moment();
        let first = render_document(&spec, &moment);
        let second = render_document(&spec, &moment);
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_sample_matches_golden_output() {
        let html = render_document(&ApiSpec::sample(), &fixed_moment());
        expect_file!["../testdata/sample-documentation.html"].assert_eq(&html);
    }

    #[test]
    fn test_render_default_state_contents() {
        let html = render_document(&ApiSpec::sample(), &fixed_moment());
        assert!(html.contains("<title>My API Documentation</title>"));
        assert!(html.contains(r#"<code class="endpoint-path">/users</code>"#));
        assert!(html.contains(">GET</span>"));
    }

    #[test]
    fn test_render_has_no_external_references() {
        let html = render_document(&ApiSpec::sample(), &fixed_moment());
        assert!(!html.contains("<link"));
        assert!(!html.contains("src=\"http"));
        assert!(!html.contains("@import"));
    }

    #[test]
    fn test_footer_embeds_moment() {
        let spec = ApiSpec::sample();
        let moment = RenderMoment {
            date: "3/7/2031".to_string(),
            year: "2031".to_string(),
        };
        let html = render_document(&spec, &moment);
        assert!(html.contains("Generated on 3/7/2031"));
        assert!(html.contains("© 2031 Your Company. All rights reserved."));
    }

    #[test]
    fn test_method_badge_known_methods_are_distinct() {
        let styles: Vec<&str> = ["GET", "POST", "PUT", "DELETE", "PATCH"]
            .iter()
            .map(|m| method_badge_style(m))
            .collect();
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_method_badge_unknown_falls_back_to_get() {
        assert_eq!(method_badge_style("FETCH"), method_badge_style("GET"));
        assert_eq!(method_badge_style(""), method_badge_style("GET"));
        // Lookup is case-sensitive
        assert_eq!(method_badge_style("get"), method_badge_style("GET"));
        assert_ne!(method_badge_style("get"), method_badge_style("POST"));
    }

    #[test]
    fn test_status_tone_exact_matching() {
        assert_eq!(status_tone("200"), StatusTone::Success);
        assert_eq!(status_tone("201"), StatusTone::Success);
        assert_eq!(status_tone("400"), StatusTone::Warning);
        assert_eq!(status_tone("404"), StatusTone::Warning);
        assert_eq!(status_tone("500"), StatusTone::Error);
        assert_eq!(status_tone("302"), StatusTone::Plain);
        // No trimming: a trailing space defeats the match
        assert_eq!(status_tone("201 "), StatusTone::Plain);
        assert_eq!(status_tone(" 200"), StatusTone::Plain);
    }

    #[test]
    fn test_status_renders_verbatim_in_class() {
        let mut spec = ApiSpec::sample();
        spec.endpoints[0].responses[0].status = "201 ".to_string();
        let html = render_document(&spec, &fixed_moment());
        assert!(html.contains(r#"class="status-code status-201 ""#));
    }

    #[test]
    fn test_render_does_not_escape_user_text() {
        let mut spec = ApiSpec::sample();
        spec.api_info.title = "<b>Bold & Raw</b>".to_string();
        let html = render_document(&spec, &fixed_moment());
        assert!(html.contains("<title><b>Bold & Raw</b></title>"));
        assert!(!html.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_render_all_responses_in_order() {
        let mut spec = ApiSpec::sample();
        spec.endpoints[0].responses.push(crate::model::Response {
            status: "404".to_string(),
            description: "Missing".to_string(),
            example: "{}".to_string(),
        });
        let html = render_document(&spec, &fixed_moment());
        let first = html.find("status-code status-200").unwrap();
        let second = html.find("status-code status-404").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_error_snippet_synthesized_from_fields() {
        let html = render_document(&ApiSpec::sample(), &fixed_moment());
        assert!(html.contains("\"code\": 401"));
        assert!(html.contains("\"type\": \"Unauthorized\""));
        assert!(html.contains("\"message\": \"Authentication required\""));
    }

    #[test]
    fn test_required_renders_yes_no() {
        let mut spec = ApiSpec::sample();
        spec.endpoints[0].parameters[0].required = true;
        let html = render_document(&spec, &fixed_moment());
        assert!(html.contains(r#"<td class="required">Yes</td>"#));
        assert!(html.contains(r#"<td class="optional">No</td>"#));
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(
            output_file_name("My API Documentation"),
            "my-api-documentation-documentation.html"
        );
        assert_eq!(output_file_name("Billing"), "billing-documentation.html");
        // Whitespace runs collapse to a single hyphen
        assert_eq!(
            output_file_name("A  \t B"),
            "a-b-documentation.html"
        );
    }
}
