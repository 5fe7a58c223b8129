// tests/tools_mysql.rs

//! Composed command lines of the mysql adapters, observed through dry runs
//! against the recording executor.

use shellstack::tools::Tool;
use shellstack::tools::mysql::{Mysql, MysqlOps};
use shellstack::{RunOptions, StackError};
use shellstack_test_utils::SpyExecutor;

fn dry_run_raw() -> RunOptions {
    RunOptions {
        dry_run: true,
        escape: false,
        ..Default::default()
    }
}

fn command_line(tool: &mut impl Tool) -> String {
    let mut spy = SpyExecutor::new();
    tool.run_with(&mut spy, dry_run_raw())
        .expect("dry run never fails")
        .command_line
}

#[test]
fn dump_composes_connection_options_and_redirection() {
    let mut dump = Mysql::dump("127.0.0.1");
    dump.user("user", Some("pass"))
        .database("dbname")
        .output("/full/path/to/dump.sql");

    assert_eq!(
        command_line(&mut dump),
        "mysqldump -h 127.0.0.1 -u user -ppass dbname > /full/path/to/dump.sql"
    );
}

#[test]
fn dump_single_transaction() {
    let mut dump = Mysql::dump("db.example.org");
    dump.single_transaction()
        .user("backup", None)
        .database("app")
        .output("/var/backups/app.sql");

    assert_eq!(
        command_line(&mut dump),
        "mysqldump -h db.example.org --single-transaction -u backup app > /var/backups/app.sql"
    );
}

#[test]
fn import_composes_input_redirection() {
    let mut import = Mysql::import("127.0.0.1");
    import
        .user("user", Some("pass"))
        .database("dbname")
        .import("/full/path/to/dump.sql");

    assert_eq!(
        command_line(&mut import),
        "mysql -h 127.0.0.1 -u user -ppass dbname < /full/path/to/dump.sql"
    );
}

#[test]
fn create_database_and_user() {
    let mut create = Mysql::create("127.0.0.1");
    create.add_database("dbname");
    create
        .add_user("user", "pass", false)
        .expect("database was created first");
    create.prepare(false);

    assert_eq!(
        command_line(&mut create),
        "mysql -h 127.0.0.1 -e 'CREATE DATABASE `dbname`;\
         GRANT ALL PRIVILEGES ON `dbname`.* TO \"user\"@\"%\" IDENTIFIED BY \"pass\";\
         GRANT ALL PRIVILEGES ON `dbname`.* TO \"user\"@\"localhost\" IDENTIFIED BY \"pass\";\
         FLUSH PRIVILEGES;'"
    );
}

#[test]
fn create_user_requires_a_database() {
    let mut create = Mysql::create("127.0.0.1");

    let err = create.add_user("user", "pass", false).unwrap_err();
    assert!(matches!(err, StackError::NoDatabase));
}

#[test]
fn create_set_database_is_enough_for_users() {
    let mut create = Mysql::create("127.0.0.1");
    create.set_database("existing");
    create
        .add_user("user", "pass", false)
        .expect("set_database selects without creating");
    create.prepare(false);

    let line = command_line(&mut create);
    assert!(!line.contains("CREATE DATABASE"));
    assert!(line.contains("ON `existing`.*"));
}

#[test]
fn create_superuser_grants_super() {
    let mut create = Mysql::create("127.0.0.1");
    create.add_database("dbname");
    create
        .add_user("user", "pass", true)
        .expect("database was created first");
    create.prepare(false);

    let line = command_line(&mut create);
    assert!(line.contains("GRANT SUPER ON *.* TO \"user\"@\"%\";"));
    assert!(line.contains("GRANT SUPER ON *.* TO \"user\"@\"localhost\";"));
}

#[test]
fn create_admin_user_gets_grant_option() {
    let mut create = Mysql::create("127.0.0.1");
    create.add_admin_user("root2", "pass");
    create.prepare(false);

    let line = command_line(&mut create);
    assert!(line.contains(
        "GRANT ALL PRIVILEGES ON *.* TO \"root2\"@\"%\" IDENTIFIED BY \"pass\" WITH GRANT OPTION;"
    ));
}

#[test]
fn identifiers_are_sanitized() {
    let mut create = Mysql::create("127.0.0.1");
    create.add_database("drop;table");
    create
        .add_user("we`ird;user", "pass", false)
        .expect("database was created first");
    create.prepare(false);

    let line = command_line(&mut create);
    assert!(line.contains("CREATE DATABASE `droptable`;"));
    assert!(line.contains("TO \"weirduser\"@"));
}

#[test]
fn passwords_escape_double_quotes() {
    let mut create = Mysql::create("127.0.0.1");
    create.add_database("dbname");
    create
        .add_user("user", "pa\"ss", false)
        .expect("database was created first");
    create.prepare(false);

    assert!(command_line(&mut create).contains("IDENTIFIED BY \"pa\"\"ss\";"));
}

#[test]
fn prepare_escapes_single_quotes_for_the_shell() {
    let mut create = Mysql::create("127.0.0.1");
    create.add_database("dbname");
    create
        .add_user("user", "pa'ss", false)
        .expect("database was created first");
    create.prepare(true);

    assert!(command_line(&mut create).contains(r"pa'\''ss"));
}
