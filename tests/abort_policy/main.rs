// 목적:
// - 기본 초기화 실패 정책(abort)이 실제로 프로세스를 중단하는지 검증한다.
//
// 설명:
// - 같은 테스트 바이너리를 자식 프로세스로 다시 실행한다.
// - 자식은 IB_BRIDGE_INIT_FAILURE 없이 손상 페이로드로 bridge_init을 호출한다.
// - abort되지 않으면 자식 테스트가 성공으로 끝나므로 부모가 실패로 판정한다.
//
// 참조:
// - src_rs/core/bridge.rs
// - src_rs/api/c_bridge.rs

use std::process::Command;

use ib_bridge::bridge_init;
use ib_bridge::core::config::ENV_INIT_FAILURE;

const CHILD_ENV: &str = "IB_BRIDGE_ABORT_CHILD";
const TEST_NAME: &str = "corrupt_payload_aborts_under_default_policy";

#[test]
fn corrupt_payload_aborts_under_default_policy() {
    if std::env::var_os(CHILD_ENV).is_some() {
        let garbage = b"definitely not an index";
        unsafe { bridge_init(garbage.as_ptr(), garbage.len()) };
        return;
    }

    let exe = std::env::current_exe().expect("test binary path");
    let output = Command::new(exe)
        .args([TEST_NAME, "--exact", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .env_remove(ENV_INIT_FAILURE)
        .output()
        .expect("child runs");

    assert!(
        !output.status.success(),
        "child exited normally: {}",
        String::from_utf8_lossy(&output.stdout)
    );

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(output.status.signal(), Some(6));
    }
}
