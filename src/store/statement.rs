/// Static description of a table a resource is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    /// Column order doubles as positional parameter order for inserts.
    pub columns: &'static [&'static str],
}

impl TableSchema {
    pub const fn new(name: &'static str, columns: &'static [&'static str]) -> Self {
        Self { name, columns }
    }
}

/// The two statements a repository may issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement {
    /// Reads one row whose `key_column` equals the single parameter.
    SelectByKey {
        table: TableSchema,
        key_column: &'static str,
    },
    /// Writes one row; parameters follow `table.columns`.
    Insert { table: TableSchema },
}

impl Statement {
    pub const fn select_by_key(table: TableSchema, key_column: &'static str) -> Self {
        Statement::SelectByKey { table, key_column }
    }

    pub const fn insert(table: TableSchema) -> Self {
        Statement::Insert { table }
    }

    pub fn table(&self) -> &TableSchema {
        match self {
            Statement::SelectByKey { table, .. } | Statement::Insert { table } => table,
        }
    }

    /// Number of positional parameters the statement expects.
    pub fn param_count(&self) -> usize {
        match self {
            Statement::SelectByKey { .. } => 1,
            Statement::Insert { table } => table.columns.len(),
        }
    }

    /// Renders the statement as SQL with `$n` placeholders.
    pub fn sql(&self) -> String {
        match self {
            Statement::SelectByKey { table, key_column } => format!(
                "SELECT {} FROM {} WHERE {} = $1 LIMIT 1",
                table.columns.join(", "),
                table.name,
                key_column
            ),
            Statement::Insert { table } => {
                let placeholders = (1..=table.columns.len())
                    .map(|n| format!("${n}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "INSERT INTO {} ({}) VALUES ({})",
                    table.name,
                    table.columns.join(", "),
                    placeholders
                )
            }
        }
    }
}
