use crate::model::{
    ApiSpec, Endpoint, EndpointId, ErrorCode, NEW_ENDPOINT_EXAMPLE, Parameter, Response,
};

/* # Why a pure state-transition reducer?

The editor is an explicit state container: every mutation is expressed as an
EditorAction and applied by a pure function (old state + action -> new state).
This makes the whole editing surface unit-testable without any UI harness,
and gives consumers trivial change detection by value comparison.
*/

/// Field selector for [`EditorAction::SetApiInfoField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiInfoField {
    Title,
    Version,
    Description,
    BaseUrl,
    CompanyName,
    ContactEmail,
}

/// Field selector for [`EditorAction::SetAuthInfoField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthInfoField {
    Type,
    Description,
    Example,
    Notes,
}

/// Field selector for [`EditorAction::UpdateEndpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointField {
    Method,
    Path,
    Title,
    Description,
}

/// Field selector for [`EditorAction::UpdateParameter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterField {
    Name,
    Type,
    /// Parsed from the string value: `"true"` means required, anything else
    /// means optional (mirroring a two-option select).
    Required,
    Description,
}

/// Field selector for [`EditorAction::UpdateErrorCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCodeField {
    Code,
    Type,
    Message,
    Description,
}

/// One editing operation against the form state.
///
/// Parameters and error codes are addressed positionally; indices shift after
/// a deletion, so callers must re-derive them. Endpoints are addressed by
/// their stable id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    SetApiInfoField {
        field: ApiInfoField,
        value: String,
    },
    SetAuthInfoField {
        field: AuthInfoField,
        value: String,
    },
    AddEndpoint,
    UpdateEndpoint {
        id: EndpointId,
        field: EndpointField,
        value: String,
    },
    DeleteEndpoint {
        id: EndpointId,
    },
    AddParameter {
        endpoint_id: EndpointId,
    },
    UpdateParameter {
        endpoint_id: EndpointId,
        index: usize,
        field: ParameterField,
        value: String,
    },
    DeleteParameter {
        endpoint_id: EndpointId,
        index: usize,
    },
    /// Sets the example of the endpoint's first response, installing a
    /// default 200 response when the list is empty. The rest of the response
    /// list is not editable through actions (a known gap, kept deliberately).
    SetResponseExample {
        endpoint_id: EndpointId,
        value: String,
    },
    AddErrorCode,
    UpdateErrorCode {
        index: usize,
        field: ErrorCodeField,
        value: String,
    },
    DeleteErrorCode {
        index: usize,
    },
}

/// The editable form state: an [`ApiSpec`] plus the id counter for endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub spec: ApiSpec,
    next_endpoint_id: u64,
}

impl Default for EditorState {
    fn default() -> Self {
        // The sample document's endpoint carries id 1.
        Self {
            spec: ApiSpec::sample(),
            next_endpoint_id: 2,
        }
    }
}

impl EditorState {
    /// Wraps a loaded spec, reassigning endpoint ids sequentially from 1 so
    /// the uniqueness invariant holds regardless of what the file contained.
    pub fn from_spec(mut spec: ApiSpec) -> Self {
        let mut next_id = 1;
        for endpoint in &mut spec.endpoints {
            endpoint.id = EndpointId(next_id);
            next_id += 1;
        }
        Self {
            spec,
            next_endpoint_id: next_id,
        }
    }

    /// Applies an action, producing the next state. Pure and total: the input
    /// state is untouched, unknown ids and out-of-range indices are no-ops.
    pub fn apply(&self, action: &EditorAction) -> EditorState {
        let mut next = self.clone();
        match action {
            EditorAction::SetApiInfoField { field, value } => {
                let info = &mut next.spec.api_info;
                let slot = match field {
                    ApiInfoField::Title => &mut info.title,
                    ApiInfoField::Version => &mut info.version,
                    ApiInfoField::Description => &mut info.description,
                    ApiInfoField::BaseUrl => &mut info.base_url,
                    ApiInfoField::CompanyName => &mut info.company_name,
                    ApiInfoField::ContactEmail => &mut info.contact_email,
                };
                *slot = value.clone();
            }
            EditorAction::SetAuthInfoField { field, value } => {
                let auth = &mut next.spec.auth_info;
                let slot = match field {
                    AuthInfoField::Type => &mut auth.auth_type,
                    AuthInfoField::Description => &mut auth.description,
                    AuthInfoField::Example => &mut auth.example,
                    AuthInfoField::Notes => &mut auth.notes,
                };
                *slot = value.clone();
            }
            EditorAction::AddEndpoint => {
                let id = EndpointId(next.next_endpoint_id);
                next.next_endpoint_id += 1;
                next.spec.endpoints.push(new_endpoint(id));
            }
            EditorAction::UpdateEndpoint { id, field, value } => {
                if let Some(endpoint) = next.endpoint_mut(*id) {
                    let slot = match field {
                        EndpointField::Method => &mut endpoint.method,
                        EndpointField::Path => &mut endpoint.path,
                        EndpointField::Title => &mut endpoint.title,
                        EndpointField::Description => &mut endpoint.description,
                    };
                    *slot = value.clone();
                }
            }
            EditorAction::DeleteEndpoint { id } => {
                next.spec.endpoints.retain(|endpoint| endpoint.id != *id);
            }
            EditorAction::AddParameter { endpoint_id } => {
                if let Some(endpoint) = next.endpoint_mut(*endpoint_id) {
                    endpoint.parameters.push(Parameter::default());
                }
            }
            EditorAction::UpdateParameter {
                endpoint_id,
                index,
                field,
                value,
            } => {
                if let Some(endpoint) = next.endpoint_mut(*endpoint_id) {
                    if let Some(param) = endpoint.parameters.get_mut(*index) {
                        match field {
                            ParameterField::Name => param.name = value.clone(),
                            ParameterField::Type => param.param_type = value.clone(),
                            ParameterField::Required => param.required = value == "true",
                            ParameterField::Description => param.description = value.clone(),
                        }
                    }
                }
            }
            EditorAction::DeleteParameter { endpoint_id, index } => {
                if let Some(endpoint) = next.endpoint_mut(*endpoint_id) {
                    if *index < endpoint.parameters.len() {
                        endpoint.parameters.remove(*index);
                    }
                }
            }
            EditorAction::SetResponseExample { endpoint_id, value } => {
                if let Some(endpoint) = next.endpoint_mut(*endpoint_id) {
                    if let Some(response) = endpoint.responses.first_mut() {
                        response.example = value.clone();
                    } else {
                        endpoint.responses = vec![Response {
                            status: "200".to_string(),
                            description: "Success".to_string(),
                            example: value.clone(),
                        }];
                    }
                }
            }
            EditorAction::AddErrorCode => {
                next.spec.error_codes.push(ErrorCode::default());
            }
            EditorAction::UpdateErrorCode {
                index,
                field,
                value,
            } => {
                if let Some(error) = next.spec.error_codes.get_mut(*index) {
                    match field {
                        ErrorCodeField::Code => error.code = value.clone(),
                        ErrorCodeField::Type => error.error_type = value.clone(),
                        ErrorCodeField::Message => error.message = value.clone(),
                        ErrorCodeField::Description => error.description = value.clone(),
                    }
                }
            }
            EditorAction::DeleteErrorCode { index } => {
                if *index < next.spec.error_codes.len() {
                    next.spec.error_codes.remove(*index);
                }
            }
        }
        next
    }

    fn endpoint_mut(&mut self, id: EndpointId) -> Option<&mut Endpoint> {
        self.spec
            .endpoints
            .iter_mut()
            .find(|endpoint| endpoint.id == id)
    }
}

/// Endpoint defaults installed by [`EditorAction::AddEndpoint`].
fn new_endpoint(id: EndpointId) -> Endpoint {
    Endpoint {
        id,
        method: "GET".to_string(),
        path: "/new-endpoint".to_string(),
        title: "New Endpoint".to_string(),
        description: "Description of the new endpoint".to_string(),
        parameters: vec![Parameter {
            name: "id".to_string(),
            param_type: "integer".to_string(),
            required: true,
            description: "Unique identifier".to_string(),
        }],
        responses: vec![Response {
            status: "200".to_string(),
            description: "Successful response".to_string(),
            example: NEW_ENDPOINT_EXAMPLE.to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_add_endpoint_defaults() {
        let state = EditorState::default();
        let next = state.apply(&EditorAction::AddEndpoint);

        assert_eq!(next.spec.endpoints.len(), 2);
        let added = &next.spec.endpoints[1];
        assert_ne!(added.id, next.spec.endpoints[0].id);
        assert_eq!(added.method, "GET");
        assert_eq!(added.path, "/new-endpoint");
        assert_eq!(added.title, "New Endpoint");
        assert_eq!(added.parameters.len(), 1);
        assert_eq!(added.parameters[0].name, "id");
        assert_eq!(added.parameters[0].param_type, "integer");
        assert!(added.parameters[0].required);
        assert_eq!(added.responses.len(), 1);
        assert_eq!(added.responses[0].status, "200");
        assert_eq!(added.responses[0].example, "{\n  \"message\": \"Success\"\n}");
    }

    #[test]
    fn test_add_then_delete_all_endpoints() {
        let mut state = EditorState::from_spec(ApiSpec::default());
        for _ in 0..5 {
            state = state.apply(&EditorAction::AddEndpoint);
        }
        assert_eq!(state.spec.endpoints.len(), 5);

        let ids: HashSet<EndpointId> = state.spec.endpoints.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 5, "ids must be pairwise distinct");

        for id in ids {
            state = state.apply(&EditorAction::DeleteEndpoint { id });
        }
        assert!(state.spec.endpoints.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut state = EditorState::from_spec(ApiSpec::default());
        state = state.apply(&EditorAction::AddEndpoint);
        let first_id = state.spec.endpoints[0].id;
        state = state.apply(&EditorAction::DeleteEndpoint { id: first_id });
        state = state.apply(&EditorAction::AddEndpoint);
        assert_ne!(state.spec.endpoints[0].id, first_id);
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let state = EditorState::default();
        let before = state.clone();
        let _next = state.apply(&EditorAction::AddEndpoint);
        assert_eq!(state, before);
    }

    #[test]
    fn test_update_endpoint_field() {
        let state = EditorState::default();
        let id = state.spec.endpoints[0].id;
        let next = state.apply(&EditorAction::UpdateEndpoint {
            id,
            field: EndpointField::Path,
            value: "/accounts".to_string(),
        });
        assert_eq!(next.spec.endpoints[0].path, "/accounts");
        // Other fields untouched
        assert_eq!(next.spec.endpoints[0].title, "Get Users");
    }

    #[test]
    fn test_update_unknown_endpoint_is_noop() {
        let state = EditorState::default();
        let next = state.apply(&EditorAction::UpdateEndpoint {
            id: EndpointId(999),
            field: EndpointField::Title,
            value: "nope".to_string(),
        });
        assert_eq!(next, state);
    }

    #[test]
    fn test_delete_unknown_endpoint_is_noop() {
        let state = EditorState::default();
        let next = state.apply(&EditorAction::DeleteEndpoint {
            id: EndpointId(999),
        });
        assert_eq!(next.spec.endpoints.len(), 1);
    }

    #[test]
    fn test_add_parameter_defaults() {
        let state = EditorState::default();
        let id = state.spec.endpoints[0].id;
        let next = state.apply(&EditorAction::AddParameter { endpoint_id: id });

        let params = &next.spec.endpoints[0].parameters;
        assert_eq!(params.len(), 3);
        assert_eq!(params[2].name, "");
        assert_eq!(params[2].param_type, "string");
        assert!(!params[2].required);
    }

    #[test]
    fn test_update_parameter_required_parses_true() {
        let state = EditorState::default();
        let id = state.spec.endpoints[0].id;

        let next = state.apply(&EditorAction::UpdateParameter {
            endpoint_id: id,
            index: 0,
            field: ParameterField::Required,
            value: "true".to_string(),
        });
        assert!(next.spec.endpoints[0].parameters[0].required);

        let next = next.apply(&EditorAction::UpdateParameter {
            endpoint_id: id,
            index: 0,
            field: ParameterField::Required,
            value: "false".to_string(),
        });
        assert!(!next.spec.endpoints[0].parameters[0].required);
    }

    #[test]
    fn test_delete_parameter_shifts_indices() {
        let state = EditorState::default();
        let id = state.spec.endpoints[0].id;
        // Sample endpoint has [page, limit]
        let next = state.apply(&EditorAction::DeleteParameter {
            endpoint_id: id,
            index: 0,
        });

        let params = &next.spec.endpoints[0].parameters;
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "limit");
    }

    #[test]
    fn test_delete_parameter_out_of_range_is_noop() {
        let state = EditorState::default();
        let id = state.spec.endpoints[0].id;
        let next = state.apply(&EditorAction::DeleteParameter {
            endpoint_id: id,
            index: 99,
        });
        assert_eq!(next.spec.endpoints[0].parameters.len(), 2);
    }

    #[test]
    fn test_set_response_example_existing() {
        let state = EditorState::default();
        let id = state.spec.endpoints[0].id;
        let next = state.apply(&EditorAction::SetResponseExample {
            endpoint_id: id,
            value: "{}".to_string(),
        });

        let responses = &next.spec.endpoints[0].responses;
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].example, "{}");
        // Status and description of the existing response are preserved
        assert_eq!(responses[0].status, "200");
        assert_eq!(responses[0].description, "Successful response");
    }

    #[test]
    fn test_set_response_example_installs_default_response() {
        let mut spec = ApiSpec::sample();
        spec.endpoints[0].responses.clear();
        let state = EditorState::from_spec(spec);
        let id = state.spec.endpoints[0].id;

        let next = state.apply(&EditorAction::SetResponseExample {
            endpoint_id: id,
            value: "[]".to_string(),
        });

        let responses = &next.spec.endpoints[0].responses;
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].status, "200");
        assert_eq!(responses[0].description, "Success");
        assert_eq!(responses[0].example, "[]");
    }

    #[test]
    fn test_add_error_code_is_blank() {
        let state = EditorState::default();
        let next = state.apply(&EditorAction::AddErrorCode);
        assert_eq!(next.spec.error_codes.len(), 5);
        assert_eq!(next.spec.error_codes[4], ErrorCode::default());
    }

    #[test]
    fn test_update_error_code_only_touches_target() {
        let state = EditorState::default();
        let next = state.apply(&EditorAction::UpdateErrorCode {
            index: 0,
            field: ErrorCodeField::Code,
            value: "403".to_string(),
        });

        assert_eq!(next.spec.error_codes[0].code, "403");
        // Only index 0's code changed
        assert_eq!(next.spec.error_codes[0].message, "Invalid request parameters");
        assert_eq!(next.spec.error_codes[1], state.spec.error_codes[1]);
        assert_eq!(next.spec.error_codes[2], state.spec.error_codes[2]);
        assert_eq!(next.spec.error_codes[3], state.spec.error_codes[3]);
    }

    #[test]
    fn test_delete_error_code() {
        let state = EditorState::default();
        let next = state.apply(&EditorAction::DeleteErrorCode { index: 1 });
        let codes: Vec<&str> = next.spec.error_codes.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["400", "404", "500"]);
    }

    #[test]
    fn test_delete_error_code_out_of_range_is_noop() {
        let state = EditorState::default();
        let next = state.apply(&EditorAction::DeleteErrorCode { index: 42 });
        assert_eq!(next.spec.error_codes.len(), 4);
    }

    #[test]
    fn test_set_api_info_field() {
        let state = EditorState::default();
        let next = state.apply(&EditorAction::SetApiInfoField {
            field: ApiInfoField::Title,
            value: "Billing API".to_string(),
        });
        assert_eq!(next.spec.api_info.title, "Billing API");
        assert_eq!(next.spec.api_info.version, "1.0.0");
    }

    #[test]
    fn test_set_auth_info_field() {
        let state = EditorState::default();
        let next = state.apply(&EditorAction::SetAuthInfoField {
            field: AuthInfoField::Type,
            value: "API Key".to_string(),
        });
        assert_eq!(next.spec.auth_info.auth_type, "API Key");
    }

    #[test]
    fn test_from_spec_normalizes_ids() {
        let mut spec = ApiSpec::sample();
        spec.endpoints.push(spec.endpoints[0].clone());
        spec.endpoints.push(spec.endpoints[0].clone());
        // All three now share id 1
        let state = EditorState::from_spec(spec);

        let ids: Vec<u64> = state.spec.endpoints.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        // Fresh additions continue past the loaded ids
        let next = state.apply(&EditorAction::AddEndpoint);
        assert_eq!(next.spec.endpoints[3].id.0, 4);
    }
}
