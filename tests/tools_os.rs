// tests/tools_os.rs

//! Renderings of the generic OS operations.

use shellstack::tools::{Os, OsOps, Tool};

fn os() -> Os {
    Os::new()
}

#[test]
fn change_dir() {
    let mut base = os();
    base.change_dir("some/path/to/test");

    assert_eq!(base.get_stacked(), "cd some/path/to/test");
}

#[test]
fn delete() {
    let mut base = os();
    base.delete("path/to/stuff/we-dont-need", false, false);

    assert_eq!(base.get_stacked(), "rm path/to/stuff/we-dont-need");
}

#[test]
fn delete_force() {
    let mut base = os();
    base.delete("path/to/stuff/we-dont-need", true, false);

    assert_eq!(base.get_stacked(), "rm -f path/to/stuff/we-dont-need");
}

#[test]
fn delete_recursive() {
    let mut base = os();
    base.delete("path/to/stuff/we-dont-need", false, true);

    assert_eq!(base.get_stacked(), "rm -r path/to/stuff/we-dont-need");
}

#[test]
fn delete_force_recursive() {
    let mut base = os();
    base.delete("path/to/stuff/we-dont-need", true, true);

    assert_eq!(base.get_stacked(), "rm -f -r path/to/stuff/we-dont-need");
}

#[test]
fn link_symbolic() {
    let mut base = os();
    base.link("real/goes/first", "link/to/here", true, false);

    assert_eq!(base.get_stacked(), "ln -s real/goes/first link/to/here");
}

#[test]
fn link_hard() {
    let mut base = os();
    base.link("real/goes/first", "link/to/here", false, false);

    assert_eq!(base.get_stacked(), "ln real/goes/first link/to/here");
}

#[test]
fn make_dir() {
    let mut base = os();
    base.make_dir("/opt/approot/build", false);

    assert_eq!(base.get_stacked(), "mkdir /opt/approot/build");
}

#[test]
fn make_dir_recursive() {
    let mut base = os();
    base.make_dir("/opt/approot/build", true);

    assert_eq!(base.get_stacked(), "mkdir -p /opt/approot/build");
}

#[test]
fn rename() {
    let mut base = os();
    base.rename("src/old-name.txt", "dst/new-name.txt", false, false);

    assert_eq!(base.get_stacked(), "mv src/old-name.txt dst/new-name.txt");
}

#[test]
fn rename_force() {
    let mut base = os();
    base.rename("src/old-name.txt", "dst/new-name.txt", true, false);

    assert_eq!(base.get_stacked(), "mv -f src/old-name.txt dst/new-name.txt");
}

#[test]
fn rename_allow_fail_joins_with_a_semicolon() {
    let mut base = os();
    base.rename("a", "b", false, true).change_dir("c");

    assert_eq!(base.get_stacked(), "mv a b; cd c");
}

#[test]
fn rename_if_exists() {
    let mut base = os();
    base.rename_if_exists("src/old-name.txt", "dst/new-name.txt", false);

    assert_eq!(
        base.get_stacked(),
        "if [ -d src/old-name.txt -o -f src/old-name.txt -o -L src/old-name.txt ]; \
         then mv src/old-name.txt dst/new-name.txt ; fi"
    );
}

#[test]
fn rename_if_exists_force() {
    let mut base = os();
    base.rename_if_exists("src/old-name.txt", "dst/new-name.txt", true);

    assert_eq!(
        base.get_stacked(),
        "if [ -d src/old-name.txt -o -f src/old-name.txt -o -L src/old-name.txt ]; \
         then mv -f src/old-name.txt dst/new-name.txt ; fi"
    );
}

#[test]
fn set_facl() {
    let mut base = os();
    base.set_facl("www/var", "www-data", "rwX", false, false, false);

    assert_eq!(base.get_stacked(), "setfacl -m u:\"www-data\":rwX www/var");
}

#[test]
fn set_facl_recursive() {
    let mut base = os();
    base.set_facl("www/var", "www-data", "rwX", true, false, false);

    assert_eq!(base.get_stacked(), "setfacl -R -m u:\"www-data\":rwX www/var");
}

#[test]
fn set_facl_recursive_default() {
    let mut base = os();
    base.set_facl("www/var", "www-data", "rwX", true, true, false);

    assert_eq!(
        base.get_stacked(),
        "setfacl -R -d -m u:\"www-data\":rwX www/var"
    );
}

#[test]
fn service_reload() {
    let mut base = os();
    base.service("apache2", "reload", false);

    assert_eq!(base.get_stacked(), "service apache2 reload");
}

#[test]
fn service_restart() {
    let mut base = os();
    base.service("php-fpm", "restart", false);

    assert_eq!(base.get_stacked(), "service php-fpm restart");
}

#[test]
fn systemctl_reload() {
    let mut base = os();
    base.systemctl("apache2", "reload", false);

    assert_eq!(base.get_stacked(), "systemctl reload apache2");
}

#[test]
fn systemctl_restart() {
    let mut base = os();
    base.systemctl("php-fpm", "restart", false);

    assert_eq!(base.get_stacked(), "systemctl restart php-fpm");
}

#[test]
fn deploy_script_renders_byte_for_byte() {
    let mut base = os();
    base.set_bash_options(&["-e", "-v", "-o pipefail"])
        .expect("valid shell options");
    base.change_dir("/opt/approot")
        .make_dir("build-new", true)
        .delete("previous", true, false)
        .rename_if_exists("current", "previous", true)
        .link("build-new", "current", true, false);

    let expected = "#!/bin/bash\n\n\
        set -e -v -o pipefail\n\n\
        cd /opt/approot\n\
        mkdir -p build-new\n\
        rm -f previous\n\
        if [ -d current -o -f current -o -L current ]; then mv -f current previous ; fi\n\
        ln -s build-new current\n";

    assert_eq!(base.to_script(), expected);
    assert_eq!(base.stack().to_string(), expected);
}
