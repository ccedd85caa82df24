use schemars::{JsonSchema, schema_for};
use serde::Serialize;
use serde_json::Value;

/// Pretty-printed schema of `T`, stripped down to what a model needs to see.
pub fn schema_text<T: JsonSchema>() -> serde_json::Result<String> {
    let schema = clean_schema(schema_for!(T))?;
    serde_json::to_string_pretty(&schema)
}

pub fn clean_schema<T: Serialize>(root: T) -> serde_json::Result<Value> {
    let mut root_val = serde_json::to_value(root)?;

    if let Value::Object(ref mut map) = root_val {
        map.remove("$schema");
        map.remove("title");
        map.remove("definitions");
        map.remove("$id");
    }

    process_schema_node(&mut root_val);
    Ok(root_val)
}

fn process_schema_node(node: &mut Value) {
    let Value::Object(map) = node else {
        return;
    };

    map.remove("title");
    map.remove("default");
    map.remove("examples");

    if let Some(Value::Object(props)) = map.get_mut("properties") {
        for val in props.values_mut() {
            process_schema_node(val);
        }
    }

    if let Some(val) = map.get_mut("items") {
        process_schema_node(val);
    }
}
