// src/tools/mysql.rs

//! The MySQL command-line tools: statement execution, dumps and imports.
//!
//! ```
//! use shellstack::tools::mysql::{Mysql, MysqlOps};
//!
//! let mut dump = Mysql::dump("127.0.0.1");
//! dump.user("user", Some("pass"))
//!     .database("dbname")
//!     .output("/full/path/to/dump.sql");
//! ```

use crate::errors::{Result, StackError};
use crate::stack::{CommandStack, Concat};
use crate::tools::Tool;

/// Entry points to the individual tools.
pub struct Mysql;

impl Mysql {
    /// `mysql`, set up for creating databases and users.
    pub fn create(host: &str) -> Create {
        Create::new(host)
    }

    /// `mysql`, set up for importing a dump.
    pub fn import(host: &str) -> Import {
        Import::new(host)
    }

    /// `mysqldump`.
    pub fn dump(host: &str) -> Dump {
        Dump::new(host)
    }
}

/// Connection handling shared by the mysql adapters.
pub trait MysqlOps: Tool + Sized {
    /// Set user and, when given, password (`-p` glued, the mysql way).
    fn user(&mut self, user: &str, password: Option<&str>) -> &mut Self {
        self.stack_mut().add_option("-u", user, Concat::Space);
        if let Some(password) = password {
            self.stack_mut().add_option("-p", password, Concat::Glued);
        }
        self
    }

    /// Database to perform the actions on; rendered after the options.
    fn database(&mut self, dbname: &str) -> &mut Self {
        self.stack_mut().add_argument(dbname);
        self
    }
}

/// Strip everything but `[0-9a-zA-Z_]` from an identifier.
fn sanitize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Create databases and users by accumulating SQL and executing it through
/// `mysql -e '...'`.
#[derive(Debug, Clone)]
pub struct Create {
    stack: CommandStack,
    sql: String,
    dbname: String,
}

impl Create {
    pub fn new(host: &str) -> Self {
        let mut stack = CommandStack::new();
        stack.set_executable("mysql");
        stack.add_option("-h", host, Concat::Space);
        Create {
            stack,
            sql: String::new(),
            dbname: String::new(),
        }
    }

    /// Set the database without creating it.
    pub fn set_database(&mut self, dbname: &str) -> &mut Self {
        self.dbname = dbname.to_string();
        self
    }

    /// Create a new database. The name is sanitized to a safe identifier.
    pub fn add_database(&mut self, dbname: &str) -> &mut Self {
        self.dbname = sanitize(dbname);
        self.sql
            .push_str(&format!("CREATE DATABASE `{}`;", self.dbname));
        self
    }

    /// Grant a new user all privileges on the current database, connecting
    /// from anywhere or localhost. `superuser` additionally grants SUPER.
    pub fn add_user(&mut self, user: &str, password: &str, superuser: bool) -> Result<&mut Self> {
        if self.dbname.is_empty() {
            return Err(StackError::NoDatabase);
        }
        let user = sanitize(user);
        // Double quotes in the password are escaped by doubling them up.
        let password = password.replace('"', "\"\"");

        self.sql.push_str(&format!(
            "GRANT ALL PRIVILEGES ON `{}`.* TO \"{user}\"@\"%\" IDENTIFIED BY \"{password}\";",
            self.dbname
        ));
        self.sql.push_str(&format!(
            "GRANT ALL PRIVILEGES ON `{}`.* TO \"{user}\"@\"localhost\" IDENTIFIED BY \"{password}\";",
            self.dbname
        ));
        if superuser {
            self.sql
                .push_str(&format!("GRANT SUPER ON *.* TO \"{user}\"@\"%\";"));
            self.sql
                .push_str(&format!("GRANT SUPER ON *.* TO \"{user}\"@\"localhost\";"));
        }
        self.sql.push_str("FLUSH PRIVILEGES;");
        Ok(self)
    }

    /// Grant a new admin user all privileges on everything, with grant
    /// option.
    pub fn add_admin_user(&mut self, user: &str, password: &str) -> &mut Self {
        let user = sanitize(user);
        let password = password.replace('"', "\"\"");

        self.sql.push_str(&format!(
            "GRANT ALL PRIVILEGES ON *.* TO \"{user}\"@\"%\" IDENTIFIED BY \"{password}\" WITH GRANT OPTION;"
        ));
        self.sql.push_str(&format!(
            "GRANT ALL PRIVILEGES ON *.* TO \"{user}\"@\"localhost\" IDENTIFIED BY \"{password}\" WITH GRANT OPTION;"
        ));
        self.sql.push_str("FLUSH PRIVILEGES;");
        self
    }

    /// Wrap the accumulated SQL into a single `-e '...'` option.
    ///
    /// With `escape`, single quotes are escaped for use inside a
    /// single-quoted shell argument (e.g. under `bash -c '...'`).
    pub fn prepare(&mut self, escape: bool) -> &mut Self {
        let sql = if escape {
            self.sql.replace('\'', r"'\''")
        } else {
            self.sql.clone()
        };
        // Buffered as one option token so the connection options stay on
        // the composed command line.
        let statement = format!("-e '{sql}'");
        self.stack.add_option(&statement, "", Concat::Space);
        self
    }
}

impl Tool for Create {
    fn stack(&self) -> &CommandStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut CommandStack {
        &mut self.stack
    }
}

impl MysqlOps for Create {}

/// `mysqldump`.
#[derive(Debug, Clone)]
pub struct Dump {
    stack: CommandStack,
}

impl Dump {
    pub fn new(host: &str) -> Self {
        let mut stack = CommandStack::new();
        stack.set_executable("mysqldump");
        stack.add_option("-h", host, Concat::Space);
        Dump { stack }
    }

    /// Dump within a single transaction.
    pub fn single_transaction(&mut self) -> &mut Self {
        self.stack
            .add_option("--single-transaction", "", Concat::Space);
        self
    }

    /// Redirect the dump into an SQL file.
    pub fn output(&mut self, dumpfile: &str) -> &mut Self {
        self.stack.add_argument(format!("> {dumpfile}"));
        self
    }
}

impl Tool for Dump {
    fn stack(&self) -> &CommandStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut CommandStack {
        &mut self.stack
    }
}

impl MysqlOps for Dump {}

/// `mysql`, fed from a dump file.
#[derive(Debug, Clone)]
pub struct Import {
    stack: CommandStack,
}

impl Import {
    pub fn new(host: &str) -> Self {
        let mut stack = CommandStack::new();
        stack.set_executable("mysql");
        stack.add_option("-h", host, Concat::Space);
        Import { stack }
    }

    /// Read the SQL file into the selected database.
    pub fn import(&mut self, dumpfile: &str) -> &mut Self {
        self.stack.add_argument(format!("< {dumpfile}"));
        self
    }
}

impl Tool for Import {
    fn stack(&self) -> &CommandStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut CommandStack {
        &mut self.stack
    }
}

impl MysqlOps for Import {}
