use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Isolated HOME plus a fixture GMS2 project with the trailing-comma `.yy`
/// files the real IDE writes.
pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub project: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let project = make_fixture_project(tmp.path());
        Self {
            _tmp: tmp,
            home,
            project,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("gmlview").expect("binary builds");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn project_arg(&self) -> String {
        self.project.to_string_lossy().to_string()
    }
}

pub fn write_png(path: &Path, width: u32, height: u32) {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&PNG_SIGNATURE);
    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
    fs::write(path, bytes).expect("write png fixture");
}

fn make_fixture_project(base: &Path) -> PathBuf {
    let root = base.join("MyGame");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("MyGame.yyp"), "{}").unwrap();

    let obj = root.join("objects").join("obj_player");
    fs::create_dir_all(&obj).unwrap();
    fs::write(
        obj.join("obj_player.yy"),
        r#"{
  "$GMObject": "",
  "name": "obj_player",
  "spriteId": {"name": "spr_player", "path": "sprites/spr_player/spr_player.yy",},
  "solid": false,
  "visible": true,
  "persistent": false,
  "physicsObject": false,
  "eventList": [
    {"$GMEvent": "", "eventNum": 0, "eventType": 0,},
    {"$GMEvent": "", "eventNum": 0, "eventType": 3,},
  ],
  "properties": [
    {"varName": "hp", "varValue": 10, "varType": 0,},
  ],
}
"#,
    )
    .unwrap();
    fs::write(obj.join("Create_0.gml"), "hp = 10;\n").unwrap();
    fs::write(obj.join("Step_0.gml"), "x += 1;\n").unwrap();

    let room = root.join("rooms").join("rm_level1");
    fs::create_dir_all(&room).unwrap();
    fs::write(
        room.join("rm_level1.yy"),
        r#"{
  "$GMRoom": "",
  "name": "rm_level1",
  "layers": [
    {"__type": "GMInstanceLayer", "name": "Instances", "depth": 0, "instances": [
      {"objId": {"name": "obj_player", "path": "objects/obj_player/obj_player.yy",},},
      {"objId": {"name": "obj_wall", "path": "objects/obj_wall/obj_wall.yy",},},
      {"objId": {"name": "obj_wall", "path": "objects/obj_wall/obj_wall.yy",},},
    ],},
    {"__type": "GMBackgroundLayer", "name": "Background", "depth": 100,},
  ],
  "roomSettings": {"inheritRoomSettings": false, "Width": 1366, "Height": 768, "Speed": 30,},
  "views": [
    {"inherit": false, "visible": true, "xview": 0, "speed": 45,},
  ],
  "isPersistent": false,
  "creationCodeFile": "",
}
"#,
    )
    .unwrap();

    let sprite = root.join("sprites").join("spr_player");
    fs::create_dir_all(&sprite).unwrap();
    fs::write(sprite.join("spr_player.yy"), "{\"name\": \"spr_player\",}\n").unwrap();
    write_png(&sprite.join("0a1b2c3d.png"), 64, 32);

    let script = root.join("scripts").join("scr_util");
    fs::create_dir_all(&script).unwrap();
    fs::write(script.join("scr_util.gml"), "function scr_util() {}\n").unwrap();

    // Pruned top-level dir with a decoy GML file
    let options = root.join("options").join("main");
    fs::create_dir_all(&options).unwrap();
    fs::write(options.join("decoy.gml"), "// never exported\n").unwrap();

    root
}
