use serde::{Deserialize, Serialize};

/* # Why are method and the various `type` fields plain Strings?

The editing surface constrains them to the constant lists below, but the
renderer must handle arbitrary values gracefully (an unrecognized method
falls back to the GET badge style). Storing free text keeps the model total:
no mutation can fail, and loaded description files never get rejected over
an unexpected method name.
*/

/// HTTP methods offered by the endpoint editor.
pub const HTTP_METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE", "PATCH"];

/// Parameter types offered by the parameter editor.
pub const PARAMETER_TYPES: &[&str] = &["string", "integer", "boolean", "array", "object"];

/// Authentication schemes offered by the auth editor.
pub const AUTH_TYPES: &[&str] = &["Bearer Token", "API Key", "OAuth 2.0", "Basic Auth"];

/// General metadata about the documented API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiInfo {
    pub title: String,
    pub version: String,
    pub description: String,
    pub base_url: String,
    pub company_name: String,
    pub contact_email: String,
}

impl Default for ApiInfo {
    fn default() -> Self {
        Self {
            title: "My API Documentation".to_string(),
            version: "1.0.0".to_string(),
            description: "Comprehensive API documentation for developers".to_string(),
            base_url: "https://api.example.com/v1".to_string(),
            company_name: "Your Company".to_string(),
            contact_email: "api@example.com".to_string(),
        }
    }
}

/// How clients authenticate against the documented API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthInfo {
    #[serde(rename = "type")]
    pub auth_type: String,
    pub description: String,
    pub example: String,
    pub notes: String,
}

impl Default for AuthInfo {
    fn default() -> Self {
        Self {
            auth_type: "Bearer Token".to_string(),
            description: "Include your API key in the Authorization header".to_string(),
            example: "Authorization: Bearer YOUR_API_KEY".to_string(),
            notes: "Keep your API key secure and never expose it in client-side code.".to_string(),
        }
    }
}

/// Identifier for an endpoint, unique within an endpoint list.
///
/// Ids are assigned by the editor at creation time and never reused within a
/// session, so a deleted endpoint's id does not come back.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EndpointId(pub u64);

impl std::fmt::Display for EndpointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One documented HTTP endpoint.
///
/// Parameter and response lists are order-significant: the renderer emits
/// them in stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    // Ids in description files are ignored; the editor reassigns them on load.
    #[serde(default)]
    pub id: EndpointId,
    pub method: String,
    pub path: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub responses: Vec<Response>,
}

/// A request parameter of an endpoint.
///
/// Names carry no uniqueness constraint; duplicates and blanks are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub required: bool,
    pub description: String,
}

impl Default for Parameter {
    fn default() -> Self {
        Self {
            name: String::new(),
            param_type: "string".to_string(),
            required: false,
            description: String::new(),
        }
    }
}

/// A documented response of an endpoint.
///
/// `example` is opaque text, typically JSON, stored and rendered verbatim.
/// It is never parsed or validated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Response {
    pub status: String,
    pub description: String,
    pub example: String,
}

/// One entry of the error code reference section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorCode {
    pub code: String,
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
    pub description: String,
}

/// A complete, renderable API description snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSpec {
    pub api_info: ApiInfo,
    pub auth_info: AuthInfo,
    pub endpoints: Vec<Endpoint>,
    pub error_codes: Vec<ErrorCode>,
}

/// Response example installed on the sample `GET /users` endpoint.
pub(crate) const SAMPLE_USERS_EXAMPLE: &str = r#"{
  "users": [
    {
      "id": 1,
      "name": "John Doe",
      "email": "john@example.com",
      "created_at": "2024-01-15T10:30:00Z"
    }
  ],
  "pagination": {
    "current_page": 1,
    "total_pages": 10,
    "total_items": 100
  }
}"#;

/// Response example installed on freshly added endpoints.
pub(crate) const NEW_ENDPOINT_EXAMPLE: &str = "{\n  \"message\": \"Success\"\n}";

impl ApiSpec {
    /// The built-in starting document: one `GET /users` endpoint and the
    /// standard four error codes.
    pub fn sample() -> Self {
        Self {
            api_info: ApiInfo::default(),
            auth_info: AuthInfo::default(),
            endpoints: vec![Endpoint {
                id: EndpointId(1),
                method: "GET".to_string(),
                path: "/users".to_string(),
                title: "Get Users".to_string(),
                description: "Retrieve a list of all users".to_string(),
                parameters: vec![
                    Parameter {
                        name: "page".to_string(),
                        param_type: "integer".to_string(),
                        required: false,
                        description: "Page number for pagination".to_string(),
                    },
                    Parameter {
                        name: "limit".to_string(),
                        param_type: "integer".to_string(),
                        required: false,
                        description: "Number of items per page".to_string(),
                    },
                ],
                responses: vec![Response {
                    status: "200".to_string(),
                    description: "Successful response".to_string(),
                    example: SAMPLE_USERS_EXAMPLE.to_string(),
                }],
            }],
            error_codes: vec![
                ErrorCode {
                    code: "400".to_string(),
                    error_type: "Bad Request".to_string(),
                    message: "Invalid request parameters".to_string(),
                    description: "The request was malformed or missing required parameters"
                        .to_string(),
                },
                ErrorCode {
                    code: "401".to_string(),
                    error_type: "Unauthorized".to_string(),
                    message: "Authentication required".to_string(),
                    description: "Valid API key or authentication token required".to_string(),
                },
                ErrorCode {
                    code: "404".to_string(),
                    error_type: "Not Found".to_string(),
                    message: "Resource not found".to_string(),
                    description: "The requested resource does not exist".to_string(),
                },
                ErrorCode {
                    code: "500".to_string(),
                    error_type: "Internal Server Error".to_string(),
                    message: "Server error occurred".to_string(),
                    description: "An unexpected error occurred on the server".to_string(),
                },
            ],
        }
    }
}
