use predicates::str::contains;
use serde_json::Value;

mod common;
use common::TestEnv;

#[test]
fn scan_prints_the_asset_tree() {
    let env = TestEnv::new();
    env.cmd()
        .args(["scan", &env.project_arg()])
        .assert()
        .success()
        .stdout(contains("MyGame"))
        .stdout(contains("├── Objects"))
        .stdout(contains("Object: obj_player"))
        .stdout(contains("Create_0"))
        .stdout(contains("Room: rm_level1"))
        .stdout(contains("Sprite: spr_player"));
}

#[test]
fn scan_json_reports_the_model() {
    let env = TestEnv::new();
    let out = env
        .cmd()
        .args(["--json", "scan", &env.project_arg()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: Value = serde_json::from_slice(&out).expect("valid json");
    assert_eq!(parsed["ok"], Value::Bool(true));
    assert_eq!(parsed["data"]["hasYyp"], Value::Bool(true));
    // Create_0, Step_0, scr_util — the decoy under options/ is pruned
    assert_eq!(parsed["data"]["gmlFiles"].as_array().unwrap().len(), 3);
}

#[test]
fn scan_warns_when_yyp_is_missing() {
    let env = TestEnv::new();
    let bare = env.home.join("NotAProject");
    std::fs::create_dir_all(bare.join("scripts")).unwrap();
    env.cmd()
        .args(["scan", &bare.to_string_lossy()])
        .assert()
        .success()
        .stderr(contains("no .yyp file"));
}

#[test]
fn show_room_renders_the_summary_tree() {
    let env = TestEnv::new();
    env.cmd()
        .args(["show", &env.project_arg(), "rooms/rm_level1"])
        .assert()
        .success()
        .stdout(contains("rm_level1\n├── Layers (2)"))
        .stdout(contains("│   ├── Instances [InstanceLayer]"))
        .stdout(contains("│   │   └── Instances (3)"))
        .stdout(contains("│   │       ├── obj_player"))
        .stdout(contains("│   │       └── obj_wall (x2)"))
        .stdout(contains("│   └── Background [BackgroundLayer]"))
        .stdout(contains("└── Properties"))
        .stdout(contains("    ├── Width: 1366"))
        // view override beats the room's own Speed: 30
        .stdout(contains("    ├── Speed: 45"))
        .stdout(contains("    └── Persistent: False"));
}

#[test]
fn show_object_renders_the_summary() {
    let env = TestEnv::new();
    env.cmd()
        .args(["show", &env.project_arg(), "objects/obj_player"])
        .assert()
        .success()
        .stdout(contains("Object: obj_player"))
        .stdout(contains("  Sprite: spr_player"))
        .stdout(contains("  Mask: Same as Sprite"))
        .stdout(contains("[Events (2)]"))
        .stdout(contains("  Enabled: False"))
        .stdout(contains("  - hp = 10 (Type: 0)"));
}

#[test]
fn show_sprite_reports_the_first_frame() {
    let env = TestEnv::new();
    env.cmd()
        .args(["show", &env.project_arg(), "sprites/spr_player"])
        .assert()
        .success()
        .stdout(contains("Sprite: spr_player"))
        .stdout(contains("Frame: 0a1b2c3d.png"))
        .stdout(contains("Size: 64x32"));
}

#[test]
fn show_script_folder_lists_gml() {
    let env = TestEnv::new();
    env.cmd()
        .args(["show", &env.project_arg(), "scripts/scr_util"])
        .assert()
        .success()
        .stdout(contains("  - scr_util.gml"));
}

#[test]
fn show_unknown_asset_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["show", &env.project_arg(), "rooms/rm_missing"])
        .assert()
        .failure()
        .stderr(contains("no asset 'rm_missing'"));
}

#[test]
fn show_malformed_yy_reports_parse_location() {
    let env = TestEnv::new();
    let broken = env.project.join("rooms").join("rm_broken");
    std::fs::create_dir_all(&broken).unwrap();
    std::fs::write(broken.join("rm_broken.yy"), "{\"name\":}").unwrap();

    env.cmd()
        .args(["show", &env.project_arg(), "rooms/rm_broken"])
        .assert()
        .failure()
        .stderr(contains("parse error at line 1"));
}

#[test]
fn cat_prints_gml_content() {
    let env = TestEnv::new();
    let gml = env.project.join("objects/obj_player/Create_0.gml");
    env.cmd()
        .args(["cat", &gml.to_string_lossy()])
        .assert()
        .success()
        .stdout(contains("hp = 10;"));
}

#[test]
fn new_creates_a_stub_and_refuses_overwrite() {
    let env = TestEnv::new();
    env.cmd()
        .args(["new", &env.project_arg(), "objects/obj_player", "Draw_0"])
        .assert()
        .success()
        .stdout(contains("Draw_0.gml"));

    let body =
        std::fs::read_to_string(env.project.join("objects/obj_player/Draw_0.gml")).unwrap();
    assert!(body.starts_with("/// @description Draw_0\n"));

    env.cmd()
        .args(["new", &env.project_arg(), "objects/obj_player", "Draw_0"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn recent_lists_scanned_projects() {
    let env = TestEnv::new();
    env.cmd()
        .args(["scan", &env.project_arg()])
        .assert()
        .success();

    env.cmd()
        .arg("recent")
        .assert()
        .success()
        .stdout(contains("* MyGame"));
}

#[test]
fn scan_writes_a_session_log() {
    let env = TestEnv::new();
    env.cmd()
        .args(["scan", &env.project_arg()])
        .assert()
        .success();

    let log = std::fs::read_to_string(env.project.join(".gmlview/logs/latest.log")).unwrap();
    assert!(log.contains("[scan] found 3 GML files"));
}
