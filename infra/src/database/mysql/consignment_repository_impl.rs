//! MySQL implementation of the ConsignmentRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};

use tg_core::domain::entities::consignment::{
    ComplianceStatus, Consignment, NewConsignment, StoredInvoice,
};
use tg_core::errors::{DomainError, DomainResult};
use tg_core::repositories::ConsignmentRepository;

use super::{map_insert_error, map_query_error};

const CONSIGNMENT_COLUMNS: &str = r#"uuid, sender_name, sender_address, sender_country, sender_mail,
       sender_phone, receiver_name, receiver_address, receiver_country,
       shipment_id, shipment_date, PackageQuantity, HS_code, totalWeight,
       Item_desc, handling_inst, compliant, created_at"#;

/// MySQL implementation of ConsignmentRepository
///
/// List and detail projections exclude the invoice blob; it is read only
/// by `fetch_invoice` for the download endpoint.
pub struct MySqlConsignmentRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlConsignmentRepository {
    /// Create a new MySQL consignment repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Consignment entity
    fn row_to_consignment(row: &sqlx::mysql::MySqlRow) -> DomainResult<Consignment> {
        let compliant: String = row.try_get("compliant").map_err(map_query_error)?;
        let compliant =
            ComplianceStatus::parse(&compliant).map_err(|e| DomainError::Database {
                message: format!("Invalid compliant column: {}", e),
            })?;

        Ok(Consignment {
            id: row.try_get("uuid").map_err(map_query_error)?,
            sender_name: row.try_get("sender_name").map_err(map_query_error)?,
            sender_address: row.try_get("sender_address").map_err(map_query_error)?,
            sender_country: row.try_get("sender_country").map_err(map_query_error)?,
            sender_mail: row.try_get("sender_mail").map_err(map_query_error)?,
            sender_phone: row.try_get("sender_phone").map_err(map_query_error)?,
            receiver_name: row.try_get("receiver_name").map_err(map_query_error)?,
            receiver_address: row.try_get("receiver_address").map_err(map_query_error)?,
            receiver_country: row.try_get("receiver_country").map_err(map_query_error)?,
            shipment_id: row.try_get("shipment_id").map_err(map_query_error)?,
            shipment_date: row
                .try_get::<NaiveDate, _>("shipment_date")
                .map_err(map_query_error)?,
            package_quantity: row.try_get("PackageQuantity").map_err(map_query_error)?,
            hs_code: row.try_get("HS_code").map_err(map_query_error)?,
            total_weight: row.try_get("totalWeight").map_err(map_query_error)?,
            item_desc: row.try_get("Item_desc").map_err(map_query_error)?,
            handling_inst: row.try_get("handling_inst").map_err(map_query_error)?,
            compliant,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(map_query_error)?,
        })
    }
}

#[async_trait]
impl ConsignmentRepository for MySqlConsignmentRepository {
    async fn insert(&self, consignment: NewConsignment) -> DomainResult<i64> {
        let query = r#"
            INSERT INTO Consignments (
                sender_name, sender_address, sender_country, sender_mail,
                sender_phone, receiver_name, receiver_address, receiver_country,
                shipment_id, shipment_date, PackageQuantity, HS_code,
                totalWeight, Item_desc, handling_inst, commercial_invoice,
                compliant
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        // New records always enter the store as pending.
        let result = sqlx::query(query)
            .bind(&consignment.sender_name)
            .bind(&consignment.sender_address)
            .bind(&consignment.sender_country)
            .bind(&consignment.sender_mail)
            .bind(&consignment.sender_phone)
            .bind(&consignment.receiver_name)
            .bind(&consignment.receiver_address)
            .bind(&consignment.receiver_country)
            .bind(&consignment.shipment_id)
            .bind(consignment.shipment_date)
            .bind(consignment.package_quantity)
            .bind(&consignment.hs_code)
            .bind(consignment.total_weight)
            .bind(&consignment.item_desc)
            .bind(&consignment.handling_inst)
            .bind(&consignment.invoice)
            .bind(ComplianceStatus::Pending.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_error(e, "shipment_id"))?;

        Ok(result.last_insert_id() as i64)
    }

    async fn fetch_all(&self) -> DomainResult<Vec<Consignment>> {
        let query = format!(
            "SELECT {CONSIGNMENT_COLUMNS}
             FROM Consignments
             ORDER BY created_at DESC, uuid DESC"
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_query_error)?;

        rows.iter().map(Self::row_to_consignment).collect()
    }

    async fn fetch_one(&self, id: i64) -> DomainResult<Option<Consignment>> {
        let query = format!(
            "SELECT {CONSIGNMENT_COLUMNS}
             FROM Consignments
             WHERE uuid = ?
             LIMIT 1"
        );

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_query_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_consignment(&row)?)),
            None => Ok(None),
        }
    }

    async fn fetch_invoice(&self, id: i64) -> DomainResult<Option<StoredInvoice>> {
        let query = r#"
            SELECT commercial_invoice, shipment_id
            FROM Consignments
            WHERE uuid = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_query_error)?;

        match result {
            Some(row) => Ok(Some(StoredInvoice {
                shipment_id: row.try_get("shipment_id").map_err(map_query_error)?,
                content: row
                    .try_get::<Option<Vec<u8>>, _>("commercial_invoice")
                    .map_err(map_query_error)?,
            })),
            None => Ok(None),
        }
    }

    async fn update_compliance(&self, id: i64, status: ComplianceStatus) -> DomainResult<bool> {
        let result = sqlx::query("UPDATE Consignments SET compliant = ? WHERE uuid = ?")
            .bind(status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_query_error)?;

        Ok(result.rows_affected() > 0)
    }
}
