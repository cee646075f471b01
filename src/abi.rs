// src/abi.rs

use indexmap::IndexMap;

pub use coco_runtime::abi::{AbiParam, RuntimeFn};

/// Every runtime symbol, in declaration order.
pub fn runtime_symbols() -> IndexMap<&'static str, RuntimeFn> {
    RuntimeFn::ALL
        .into_iter()
        .map(|func| (func.symbol(), func))
        .collect()
}

/// C prototype for a runtime function, e.g. `void __coco_print_int(int64_t value);`.
pub fn c_prototype(func: RuntimeFn) -> String {
    let param = match func.param() {
        AbiParam::I64 => "int64_t",
        AbiParam::F64 => "double",
    };
    format!("void {}({} value);", func.symbol(), param)
}
