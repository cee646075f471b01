// src/coco_runtime/src/abi.rs

use std::fmt;

/// Parameter type of a runtime entry point, as seen across the C ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbiParam {
    I64, // int64_t
    F64, // double
}

/// The functions exported by the runtime for generated code to call.
/// Every entry point takes a single argument and returns nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeFn {
    PrintInt,
    PrintFloat,
    PrintBool,
}

impl RuntimeFn {
    pub const ALL: [RuntimeFn; 3] = [RuntimeFn::PrintInt, RuntimeFn::PrintFloat, RuntimeFn::PrintBool];

    /// Linker-visible symbol name.
    pub fn symbol(self) -> &'static str {
        match self {
            RuntimeFn::PrintInt => "__coco_print_int",
            RuntimeFn::PrintFloat => "__coco_print_float",
            RuntimeFn::PrintBool => "__coco_print_bool",
        }
    }

    pub fn param(self) -> AbiParam {
        match self {
            RuntimeFn::PrintFloat => AbiParam::F64,
            // Booleans cross the boundary as an i64 tag
            RuntimeFn::PrintInt | RuntimeFn::PrintBool => AbiParam::I64,
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<RuntimeFn> {
        RuntimeFn::ALL.into_iter().find(|f| f.symbol() == symbol)
    }
}

impl fmt::Display for RuntimeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
