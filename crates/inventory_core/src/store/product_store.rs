//! Product store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide raw query/insert/update/delete over the `products` table.
//! - Keep SQL assembly inside the persistence boundary.
//!
//! # Invariants
//! - `insert` rejects a missing or empty `name` before touching storage.
//! - `update` with an empty write set returns 0 without running SQL.
//! - Every operation is a single statement; there is no partial failure.

use crate::contract;
use crate::db::DbError;
use crate::model::product::{ConstraintError, Product, ProductId, ProductValues};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error surface of the store layer.
#[derive(Debug)]
pub enum StoreError {
    /// A write violated a field constraint; nothing was persisted.
    Constraint(ConstraintError),
    /// The underlying engine failed; opaque to this layer.
    Db(DbError),
    /// A persisted row failed to parse into the domain shape.
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constraint(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted product data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Constraint(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ConstraintError> for StoreError {
    fn from(value: ConstraintError) -> Self {
        Self::Constraint(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Column of the `products` table, used for query projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Name,
    Description,
    Quantity,
    Price,
    ImageUri,
    SupplierName,
    SupplierEmail,
}

impl Column {
    /// All columns, in persisted order.
    pub const ALL: [Column; 8] = [
        Column::Id,
        Column::Name,
        Column::Description,
        Column::Quantity,
        Column::Price,
        Column::ImageUri,
        Column::SupplierName,
        Column::SupplierEmail,
    ];

    pub fn as_sql(self) -> &'static str {
        match self {
            Column::Id => contract::COLUMN_ID,
            Column::Name => contract::COLUMN_NAME,
            Column::Description => contract::COLUMN_DESCRIPTION,
            Column::Quantity => contract::COLUMN_QUANTITY,
            Column::Price => contract::COLUMN_PRICE,
            Column::ImageUri => contract::COLUMN_IMAGE,
            Column::SupplierName => contract::COLUMN_SUPPLIER_NAME,
            Column::SupplierEmail => contract::COLUMN_SUPPLIER_EMAIL,
        }
    }
}

/// Row filter: a SQL predicate fragment with positional arguments.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    clause: String,
    args: Vec<Value>,
}

impl Filter {
    pub fn new(clause: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            clause: clause.into(),
            args,
        }
    }

    /// Filter matching exactly one product by id.
    ///
    /// Item locators are rewritten to this filter regardless of what the
    /// caller passed alongside them.
    pub fn id_equals(id: ProductId) -> Self {
        Self::new(
            format!("{} = ?", contract::COLUMN_ID),
            vec![Value::Integer(id)],
        )
    }

    pub fn clause(&self) -> &str {
        &self.clause
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }
}

/// One queried row, projected to the requested columns.
///
/// Fields for columns outside the projection stay `None`. `image_uri` is
/// also `None` when the stored value is NULL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductRow {
    pub id: Option<ProductId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
    pub image_uri: Option<String>,
    pub supplier_name: Option<String>,
    pub supplier_email: Option<String>,
}

impl ProductRow {
    /// Converts a full-projection row into a [`Product`].
    ///
    /// Returns `InvalidData` when a required column is missing from the
    /// projection.
    pub fn into_product(self) -> StoreResult<Product> {
        let field = |name: &str| {
            StoreError::InvalidData(format!("column `{name}` missing from projection"))
        };
        Ok(Product {
            id: self.id.ok_or_else(|| field(contract::COLUMN_ID))?,
            name: self.name.ok_or_else(|| field(contract::COLUMN_NAME))?,
            description: self
                .description
                .ok_or_else(|| field(contract::COLUMN_DESCRIPTION))?,
            quantity: self.quantity.ok_or_else(|| field(contract::COLUMN_QUANTITY))?,
            price: self.price.ok_or_else(|| field(contract::COLUMN_PRICE))?,
            image_uri: self.image_uri,
            supplier_name: self
                .supplier_name
                .ok_or_else(|| field(contract::COLUMN_SUPPLIER_NAME))?,
            supplier_email: self
                .supplier_email
                .ok_or_else(|| field(contract::COLUMN_SUPPLIER_EMAIL))?,
        })
    }
}

/// Data-access contract for product rows.
///
/// The router depends on this trait rather than the SQLite implementation,
/// so structural-rejection paths can be verified with a counting double.
pub trait ProductStore {
    /// Returns rows matching `filter`, projected to `projection` (empty
    /// projection selects all columns), ordered by the optional SQL
    /// `order` fragment. Full result set, no pagination.
    fn query(
        &self,
        projection: &[Column],
        filter: Option<&Filter>,
        order: Option<&str>,
    ) -> StoreResult<Vec<ProductRow>>;

    /// Appends a row and returns its assigned id.
    fn insert(&self, values: &ProductValues) -> StoreResult<ProductId>;

    /// Applies `values` to all rows matching `filter`; returns the count.
    fn update(&self, filter: Option<&Filter>, values: &ProductValues) -> StoreResult<usize>;

    /// Removes all rows matching `filter`; returns the count.
    fn delete(&self, filter: Option<&Filter>) -> StoreResult<usize>;
}

/// SQLite-backed product store borrowing an opened connection.
pub struct SqliteProductStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProductStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProductStore for SqliteProductStore<'_> {
    fn query(
        &self,
        projection: &[Column],
        filter: Option<&Filter>,
        order: Option<&str>,
    ) -> StoreResult<Vec<ProductRow>> {
        let columns: &[Column] = if projection.is_empty() {
            &Column::ALL
        } else {
            projection
        };

        let column_list = columns
            .iter()
            .map(|column| column.as_sql())
            .collect::<Vec<_>>()
            .join(", ");
        let mut sql = format!("SELECT {column_list} FROM {}", contract::TABLE_PRODUCTS);

        let mut bind_values: Vec<Value> = Vec::new();
        if let Some(filter) = filter {
            sql.push_str(" WHERE ");
            sql.push_str(filter.clause());
            bind_values.extend_from_slice(filter.args());
        }
        if let Some(order) = order {
            sql.push_str(" ORDER BY ");
            sql.push_str(order);
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut result = Vec::new();
        while let Some(row) = rows.next()? {
            result.push(parse_projected_row(row, columns)?);
        }

        Ok(result)
    }

    fn insert(&self, values: &ProductValues) -> StoreResult<ProductId> {
        values.validate_name(true)?;

        let (columns, bind_values) = write_set(values);
        let placeholders = vec!["?"; columns.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({});",
            contract::TABLE_PRODUCTS,
            columns.join(", "),
            placeholders
        );

        self.conn.execute(&sql, params_from_iter(bind_values))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, filter: Option<&Filter>, values: &ProductValues) -> StoreResult<usize> {
        values.validate_name(false)?;

        if values.is_empty() {
            return Ok(0);
        }

        let (columns, mut bind_values) = write_set(values);
        let assignments = columns
            .iter()
            .map(|column| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let mut sql = format!("UPDATE {} SET {assignments}", contract::TABLE_PRODUCTS);

        if let Some(filter) = filter {
            sql.push_str(" WHERE ");
            sql.push_str(filter.clause());
            bind_values.extend_from_slice(filter.args());
        }

        let changed = self.conn.execute(&sql, params_from_iter(bind_values))?;
        Ok(changed)
    }

    fn delete(&self, filter: Option<&Filter>) -> StoreResult<usize> {
        let mut sql = format!("DELETE FROM {}", contract::TABLE_PRODUCTS);
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(filter) = filter {
            sql.push_str(" WHERE ");
            sql.push_str(filter.clause());
            bind_values.extend_from_slice(filter.args());
        }

        let removed = self.conn.execute(&sql, params_from_iter(bind_values))?;
        Ok(removed)
    }
}

fn parse_projected_row(row: &Row<'_>, columns: &[Column]) -> StoreResult<ProductRow> {
    let mut parsed = ProductRow::default();
    for (index, column) in columns.iter().enumerate() {
        match column {
            Column::Id => parsed.id = Some(row.get(index)?),
            Column::Name => parsed.name = Some(row.get(index)?),
            Column::Description => parsed.description = Some(row.get(index)?),
            Column::Quantity => parsed.quantity = Some(row.get(index)?),
            Column::Price => parsed.price = Some(row.get(index)?),
            Column::ImageUri => parsed.image_uri = row.get(index)?,
            Column::SupplierName => parsed.supplier_name = Some(row.get(index)?),
            Column::SupplierEmail => parsed.supplier_email = Some(row.get(index)?),
        }
    }
    Ok(parsed)
}

fn write_set(values: &ProductValues) -> (Vec<&'static str>, Vec<Value>) {
    let mut columns = Vec::new();
    let mut bind_values = Vec::new();

    if let Some(name) = &values.name {
        columns.push(contract::COLUMN_NAME);
        bind_values.push(Value::Text(name.clone()));
    }
    if let Some(description) = &values.description {
        columns.push(contract::COLUMN_DESCRIPTION);
        bind_values.push(Value::Text(description.clone()));
    }
    if let Some(quantity) = values.quantity {
        columns.push(contract::COLUMN_QUANTITY);
        bind_values.push(Value::Integer(quantity));
    }
    if let Some(price) = values.price {
        columns.push(contract::COLUMN_PRICE);
        bind_values.push(Value::Real(price));
    }
    if let Some(image_uri) = &values.image_uri {
        columns.push(contract::COLUMN_IMAGE);
        bind_values.push(Value::Text(image_uri.clone()));
    }
    if let Some(supplier_name) = &values.supplier_name {
        columns.push(contract::COLUMN_SUPPLIER_NAME);
        bind_values.push(Value::Text(supplier_name.clone()));
    }
    if let Some(supplier_email) = &values.supplier_email {
        columns.push(contract::COLUMN_SUPPLIER_EMAIL);
        bind_values.push(Value::Text(supplier_email.clone()));
    }

    (columns, bind_values)
}
