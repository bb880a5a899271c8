use assert_cmd::Command;

pub fn flier_cmd() -> Command {
    let mut cmd = Command::cargo_bin("flier").unwrap();
    cmd.env_remove("FLIER_ROOT");
    cmd
}
