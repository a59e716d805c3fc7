//! Post-processing passes over the host's render model, run just before
//! template rendering.

use apigen_core::model::{Operation, OperationGroup, PathGroup, SupportingData};
use indexmap::IndexMap;

/// Only examples under this content-type prefix survive normalization; the
/// handler template renders JSON bodies and nothing else.
const JSON_EXAMPLE_PREFIX: &str = "application/json";

/// Response code the host emits for a catch-all response.
const WILDCARD_RESPONSE_CODE: &str = "0";

/// What the catch-all code becomes in generated Python.
const DEFAULT_RESPONSE_CODE: &str = "default";

/// Normalize one API's operations for the Tornado handler template:
/// lowercase HTTP methods, drop empty parameter lists, rewrite catch-all
/// response codes, and keep only JSON examples.
pub fn normalize_operations(mut group: OperationGroup) -> OperationGroup {
    for op in &mut group.operations {
        op.http_method = op.http_method.to_lowercase();

        if op.params.as_ref().is_some_and(|params| params.is_empty()) {
            op.params = None;
        }

        for response in &mut op.responses {
            if response.code == WILDCARD_RESPONSE_CODE {
                response.code = DEFAULT_RESPONSE_CODE.to_string();
            }
        }

        if let Some(examples) = &mut op.examples {
            examples.retain(|example| {
                example
                    .content_type
                    .as_deref()
                    .is_some_and(|content_type| content_type.starts_with(JSON_EXAMPLE_PREFIX))
            });
        }
    }
    group
}

/// Attach a by-path view of every API's operations to the supporting-file
/// context, so `run.py` can register one handler class per URL.
pub fn attach_path_groups(mut data: SupportingData) -> SupportingData {
    for api in &mut data.api_info.apis {
        let groups = group_by_path(&mut api.operations.operations);
        log::debug!(
            "grouped {} operations into {} paths for `{}`",
            api.operations.operations.len(),
            groups.len(),
            api.operations.classname
        );
        api.operations.operations_by_path = groups;
    }
    data
}

/// Group operations by path, preserving discovery order of both paths and
/// the operations within each path.
///
/// The operation that closes a path group has `has_more` cleared in the flat
/// list as well, so both views agree on where separators fall.
fn group_by_path(operations: &mut [Operation]) -> Vec<PathGroup> {
    let mut by_path: IndexMap<String, Vec<usize>> = IndexMap::new();
    for (i, op) in operations.iter().enumerate() {
        by_path.entry(op.path.clone()).or_default().push(i);
    }

    let group_count = by_path.len();
    by_path
        .into_iter()
        .enumerate()
        .map(|(group_index, (path, indices))| {
            if let Some(&last) = indices.last() {
                operations[last].has_more = false;
            }
            PathGroup {
                path,
                operations: indices.iter().map(|&i| operations[i].clone()).collect(),
                has_more: group_index + 1 < group_count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use apigen_core::model::{Example, Parameter, Response};

    use super::*;

    fn op(method: &str, path: &str) -> Operation {
        Operation {
            operation_id: None,
            http_method: method.to_string(),
            path: path.to_string(),
            summary: None,
            params: None,
            responses: Vec::new(),
            examples: None,
            has_more: true,
        }
    }

    #[test]
    fn test_http_methods_are_lowercased() {
        let group = OperationGroup {
            operations: vec![op("GET", "/pets"), op("Post", "/pets"), op("delete", "/pets")],
            ..OperationGroup::default()
        };
        let group = normalize_operations(group);
        let methods: Vec<&str> = group
            .operations
            .iter()
            .map(|op| op.http_method.as_str())
            .collect();
        assert_eq!(methods, ["get", "post", "delete"]);
    }

    #[test]
    fn test_empty_params_become_absent() {
        let mut with_empty = op("GET", "/pets");
        with_empty.params = Some(Vec::new());
        let mut with_one = op("GET", "/pets/{petId}");
        with_one.params = Some(vec![Parameter {
            param_name: "petId".to_string(),
            data_type: Some("int".to_string()),
            required: true,
        }]);

        let group = normalize_operations(OperationGroup {
            operations: vec![with_empty, with_one],
            ..OperationGroup::default()
        });

        assert_eq!(group.operations[0].params, None);
        assert_eq!(
            group.operations[1].params.as_ref().map(|p| p.len()),
            Some(1)
        );
    }

    #[test]
    fn test_wildcard_response_code_becomes_default() {
        let mut operation = op("GET", "/pets");
        operation.responses = vec![
            Response {
                code: "200".to_string(),
                message: None,
            },
            Response {
                code: "0".to_string(),
                message: Some("unexpected error".to_string()),
            },
        ];

        let group = normalize_operations(OperationGroup {
            operations: vec![operation],
            ..OperationGroup::default()
        });

        let codes: Vec<&str> = group.operations[0]
            .responses
            .iter()
            .map(|r| r.code.as_str())
            .collect();
        assert_eq!(codes, ["200", "default"]);
    }

    #[test]
    fn test_only_json_examples_survive() {
        let mut operation = op("POST", "/pets");
        operation.examples = Some(vec![
            Example {
                content_type: Some("application/json".to_string()),
                example: Some("{}".to_string()),
            },
            Example {
                content_type: Some("application/json; charset=utf-8".to_string()),
                example: Some("{}".to_string()),
            },
            Example {
                content_type: Some("text/plain".to_string()),
                example: Some("ok".to_string()),
            },
            Example {
                content_type: None,
                example: Some("{}".to_string()),
            },
        ]);

        let group = normalize_operations(OperationGroup {
            operations: vec![operation],
            ..OperationGroup::default()
        });

        let examples = group.operations[0].examples.as_ref().unwrap();
        assert_eq!(examples.len(), 2);
        assert!(
            examples
                .iter()
                .all(|e| e.content_type.as_deref().unwrap().starts_with("application/json"))
        );
    }

    #[test]
    fn test_filtered_out_examples_leave_an_empty_list() {
        let mut operation = op("POST", "/pets");
        operation.examples = Some(vec![Example {
            content_type: Some("text/plain".to_string()),
            example: Some("ok".to_string()),
        }]);

        let group = normalize_operations(OperationGroup {
            operations: vec![operation],
            ..OperationGroup::default()
        });

        // The list stays present; only its entries are dropped.
        assert_eq!(group.operations[0].examples.as_ref().map(Vec::len), Some(0));
    }

    #[test]
    fn test_groups_preserve_discovery_order() {
        let mut data = SupportingData::default();
        data.api_info.apis.push(Default::default());
        data.api_info.apis[0].operations.operations = vec![
            op("get", "/pets"),
            op("post", "/pets"),
            op("get", "/owners"),
            op("put", "/pets"),
        ];

        let data = attach_path_groups(data);
        let groups = &data.api_info.apis[0].operations.operations_by_path;

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].path, "/pets");
        assert_eq!(groups[1].path, "/owners");

        let pets_methods: Vec<&str> = groups[0]
            .operations
            .iter()
            .map(|op| op.http_method.as_str())
            .collect();
        assert_eq!(pets_methods, ["get", "post", "put"]);
    }

    #[test]
    fn test_last_group_has_no_more_marker() {
        let mut data = SupportingData::default();
        data.api_info.apis.push(Default::default());
        data.api_info.apis[0].operations.operations =
            vec![op("get", "/pets"), op("get", "/owners"), op("get", "/stores")];

        let data = attach_path_groups(data);
        let groups = &data.api_info.apis[0].operations.operations_by_path;

        assert_eq!(groups.len(), 3);
        assert!(groups[0].has_more);
        assert!(groups[1].has_more);
        assert!(!groups[2].has_more);
    }

    #[test]
    fn test_path_closing_operations_lose_has_more_in_both_views() {
        let mut data = SupportingData::default();
        data.api_info.apis.push(Default::default());
        data.api_info.apis[0].operations.operations = vec![
            op("get", "/pets"),
            op("post", "/pets"),
            op("get", "/owners"),
        ];

        let data = attach_path_groups(data);
        let operations = &data.api_info.apis[0].operations.operations;
        let groups = &data.api_info.apis[0].operations.operations_by_path;

        // Flat list: /pets closes at index 1, /owners at index 2.
        assert!(operations[0].has_more);
        assert!(!operations[1].has_more);
        assert!(!operations[2].has_more);

        // Grouped view mirrors the flat list.
        assert!(groups[0].operations[0].has_more);
        assert!(!groups[0].operations[1].has_more);
        assert!(!groups[1].operations[0].has_more);
    }

    #[test]
    fn test_single_path_single_operation() {
        let mut data = SupportingData::default();
        data.api_info.apis.push(Default::default());
        data.api_info.apis[0].operations.operations = vec![op("get", "/health")];

        let data = attach_path_groups(data);
        let groups = &data.api_info.apis[0].operations.operations_by_path;

        assert_eq!(groups.len(), 1);
        assert!(!groups[0].has_more);
        assert!(!groups[0].operations[0].has_more);
    }

    #[test]
    fn test_empty_api_list_passes_through() {
        let data = attach_path_groups(SupportingData::default());
        assert!(data.api_info.apis.is_empty());
    }
}
