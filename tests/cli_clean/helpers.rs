use crate::common::*;

/// chair v1-v4 referenced at v2, table v1-v2 referenced at v2
pub fn fresh_env() -> TestEnv {
    TestEnv::builder()
        .with_versions("model", "chair", &[1, 2, 3, 4])
        .with_versions("model", "table", &[1, 2])
        .with_reference("/obj/chair/file", &job_path("model", "chair", 2))
        .with_reference("/obj/table/file", &job_path("model", "table", 2))
        .build()
}

pub fn chair_versions(env: &TestEnv) -> Vec<u32> {
    env.versions_on_disk("model", "chair", &[1, 2, 3, 4])
}

pub fn table_versions(env: &TestEnv) -> Vec<u32> {
    env.versions_on_disk("model", "table", &[1, 2])
}
