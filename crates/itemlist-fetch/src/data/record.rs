use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the remote item list.
///
/// Field names follow the wire format exactly (`listId`, `name`, `id`).
/// Absent or `null` numeric fields decode to `0`; an absent or `null` name
/// decodes to `None`. A field carrying the wrong JSON type is a decode error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Group identifier. Not unique; primary sort key.
    #[serde(default, deserialize_with = "null_as_default")]
    pub list_id: i64,

    /// Display name, usually of the form `"Item <n>"`.
    #[serde(default)]
    pub name: Option<String>,

    /// Unique identifier. Carried along for display only.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
}

impl Record {
    pub fn new(list_id: i64, name: Option<&str>, id: i64) -> Self {
        Self {
            list_id,
            name: name.map(str::to_owned),
            id,
        }
    }

    pub fn name(&self) -> Option<&str> { self.name.as_deref() }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
