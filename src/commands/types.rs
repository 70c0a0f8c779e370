use crate::result::Result;
use crate::wstypes::WebServiceType;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct TypeInfo {
    name: &'static str,
    queue: &'static str,
}

fn type_infos() -> Vec<TypeInfo> {
    WebServiceType::ALL
        .iter()
        .map(|kind| TypeInfo {
            name: kind.name(),
            queue: kind.queue(),
        })
        .collect()
}

pub async fn execute(json: bool) -> Result<()> {
    let infos = type_infos();

    if json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    for info in &infos {
        println!("{:<14} {}", info.name, info.queue);
    }

    Ok(())
}
