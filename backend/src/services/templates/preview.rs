use actix_web::web::Json;
use actix_web::{HttpResponse, Responder};
use common::model::template::{sample_variables, substitute_variables};
use common::requests::TemplatePreviewRequest;

/// `POST /api/templates/preview`. Substitutes `#{variable}` placeholders in
/// the posted content; falls back to the demo mapping when no variables are
/// posted.
pub async fn process(request: Json<TemplatePreviewRequest>) -> impl Responder {
    let variables = request
        .variables
        .clone()
        .unwrap_or_else(sample_variables);
    let rendered = substitute_variables(&request.content, &variables);
    HttpResponse::Ok().json(serde_json::json!({ "content": rendered }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn preview_uses_posted_variables_over_samples() {
        let mut vars = HashMap::new();
        vars.insert("client_name".to_string(), "Pedro".to_string());
        let rendered = substitute_variables("Hola #{client_name}", &vars);
        assert_eq!(rendered, "Hola Pedro");
    }

    #[test]
    fn preview_default_mapping_fills_the_vocabulary() {
        let rendered =
            substitute_variables("Orden #{order_id} de #{client_name}", &sample_variables());
        assert_eq!(rendered, "Orden 12345678 de María García");
    }
}
