// 목적:
// - Android 호스트가 호출하는 JNI 심볼 두 개를 노출한다.
//
// 설명:
// - bridgeInit: Java byte[] 페이로드로 전역 인덱스를 교체한다. 실패는 C 심볼과 같은 정책을 따른다.
// - bridgeSearch: 질의 결과를 Java byte[]로 반환한다. 어떤 실패도 빈 배열이다.
// - JVM 예외를 던지지 않는다. 변환 실패는 로그로 남긴다.
//
// 디자인 패턴:
// - 파사드(Facade).
//
// 참조:
// - src_rs/api/host.rs
// - src_rs/api/c_bridge.rs

use jni::objects::{JByteArray, JClass, JString};
use jni::sys::jbyteArray;
use jni::JNIEnv;
use tracing::warn;

use crate::api::host::{fail_init_from_host, init_from_host, search_from_host};
use crate::core::errors::CoreError;

#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn Java_bible_instant_ui_main_MainViewModel_bridgeInit<'local>(
    env: JNIEnv<'local>,
    _class: JClass<'local>,
    data: JByteArray<'local>,
) {
    if data.is_null() {
        fail_init_from_host(CoreError::InvalidInput(
            "null byte[] 페이로드가 전달되었습니다".to_string(),
        ));
        return;
    }

    match env.convert_byte_array(&data) {
        Ok(payload) => init_from_host(&payload),
        Err(error) => fail_init_from_host(CoreError::InvalidInput(format!(
            "byte[] 페이로드를 읽지 못했습니다: {}",
            error
        ))),
    }
}

#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn Java_bible_instant_ui_main_MainViewModel_bridgeSearch<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    query: JString<'local>,
) -> jbyteArray {
    let bytes = if query.is_null() {
        warn!("null 질의 문자열이 전달되어 빈 배열을 반환합니다");
        Vec::new()
    } else {
        match env.get_string(&query) {
            Ok(query) => search_from_host(&String::from(query)),
            Err(error) => {
                warn!(%error, "질의 문자열을 읽지 못해 빈 배열을 반환합니다");
                Vec::new()
            }
        }
    };

    match env.byte_array_from_slice(&bytes) {
        Ok(array) => array.into_raw(),
        Err(error) => {
            warn!(%error, "결과 byte[]를 만들지 못했습니다");
            std::ptr::null_mut()
        }
    }
}
