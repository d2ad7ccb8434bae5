use actix_web::{HttpResponse, Responder};
use common::model::order::TranslationOrder;
use log::error;
use rusqlite::Connection;

use crate::db;
use crate::services::orders::{order_from_row, ORDER_COLUMNS};

/// `GET /api/orders`. Returns every order, newest request first.
pub async fn process() -> impl Responder {
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => {
            error!("No se pudo abrir la base de datos: {}", e);
            return HttpResponse::ServiceUnavailable().body(e);
        }
    };
    match list_orders(&conn) {
        Ok(orders) => HttpResponse::Ok().json(orders),
        Err(e) => {
            error!("Error listando órdenes: {}", e);
            HttpResponse::ServiceUnavailable().body(e)
        }
    }
}

fn list_orders(conn: &Connection) -> Result<Vec<TranslationOrder>, String> {
    let sql = format!(
        "SELECT {} FROM solicitudes_traduccion ORDER BY fecha_solicitud DESC",
        ORDER_COLUMNS
    );
    let mut stmt = conn.prepare(&sql).map_err(|e| e.to_string())?;
    let rows = stmt
        .query_map([], order_from_row)
        .map_err(|e| e.to_string())?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::services::orders::tests::insert_order;

    #[test]
    fn lists_all_orders() {
        let conn = db::open_in_memory();
        insert_order(&conn, "a", "[]");
        insert_order(&conn, "b", "[]");
        let orders = list_orders(&conn).unwrap();
        assert_eq!(orders.len(), 2);
    }

    #[test]
    fn empty_table_lists_nothing() {
        let conn = db::open_in_memory();
        assert!(list_orders(&conn).unwrap().is_empty());
    }
}
