use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootDto {
    pub version: &'static str,
    pub name: &'static str,
    #[serde(rename = "_links")]
    pub _links: RootLinks,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootLinks {
    pub convert: &'static str,
    pub health: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub ok: bool,
}
