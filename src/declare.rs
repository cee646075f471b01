// src/declare.rs
//
// Declares the runtime's print functions in an LLVM module and emits calls to
// them. One `RuntimeDecls` per module; call `reset` before reusing it.

use inkwell::builder::{Builder, BuilderError};
use inkwell::module::{Linkage, Module};
use inkwell::types::BasicMetadataTypeEnum;
use inkwell::values::{BasicMetadataValueEnum, BasicValueEnum, FunctionValue};
use indexmap::IndexMap;
use thiserror::Error;

use crate::abi::{AbiParam, RuntimeFn};

#[derive(Debug, Error, PartialEq)]
pub enum DeclError {
    #[error("LLVM error: {0}")]
    Llvm(String),
    #[error("cannot print value of type {0}")]
    UnsupportedValue(String),
}

impl From<BuilderError> for DeclError {
    fn from(err: BuilderError) -> Self {
        DeclError::Llvm(err.to_string())
    }
}

pub type DeclResult<T> = Result<T, DeclError>;

#[derive(Debug, Default)]
pub struct RuntimeDecls<'ctx> {
    funcs: IndexMap<RuntimeFn, FunctionValue<'ctx>>,
}

impl<'ctx> RuntimeDecls<'ctx> {
    pub fn new() -> Self {
        RuntimeDecls {
            funcs: IndexMap::new(),
        }
    }

    pub fn reset(&mut self) {
        self.funcs.clear();
    }

    /// Declared functions, in the order they were first needed.
    pub fn declared(&self) -> impl Iterator<Item = RuntimeFn> + '_ {
        self.funcs.keys().copied()
    }

    /// `declare void @<symbol>(i64|double)`, added once per module. An
    /// existing declaration with the same name is reused.
    pub fn get_or_declare(&mut self, module: &Module<'ctx>, func: RuntimeFn) -> FunctionValue<'ctx> {
        if let Some(existing) = self.funcs.get(&func) {
            return *existing;
        }

        let declared = match module.get_function(func.symbol()) {
            Some(existing) => existing,
            None => {
                let context = module.get_context();
                let param: BasicMetadataTypeEnum<'ctx> = match func.param() {
                    AbiParam::I64 => context.i64_type().into(),
                    AbiParam::F64 => context.f64_type().into(),
                };
                let fn_type = context.void_type().fn_type(&[param], false);
                module.add_function(func.symbol(), fn_type, Some(Linkage::External))
            }
        };
        self.funcs.insert(func, declared);
        declared
    }

    /// Emits the runtime call that prints `value` at the builder's position.
    /// `i1` is widened to the i64 boolean tag, other integers are sign-extended
    /// or truncated to i64, `float` is extended to `double`.
    pub fn build_print(
        &mut self,
        builder: &Builder<'ctx>,
        module: &Module<'ctx>,
        value: BasicValueEnum<'ctx>,
    ) -> DeclResult<RuntimeFn> {
        let context = module.get_context();
        let i64_type = context.i64_type();

        let (func, arg): (RuntimeFn, BasicMetadataValueEnum<'ctx>) = match value {
            BasicValueEnum::IntValue(iv) => {
                let width = iv.get_type().get_bit_width();
                if width == 1 {
                    let tag = builder.build_int_z_extend(iv, i64_type, "bool_tag")?;
                    (RuntimeFn::PrintBool, tag.into())
                } else if width == 64 {
                    (RuntimeFn::PrintInt, iv.into())
                } else if width < 64 {
                    let wide = builder.build_int_s_extend(iv, i64_type, "int_ext")?;
                    (RuntimeFn::PrintInt, wide.into())
                } else {
                    let narrow = builder.build_int_truncate(iv, i64_type, "int_trunc")?;
                    (RuntimeFn::PrintInt, narrow.into())
                }
            }
            BasicValueEnum::FloatValue(fv) => {
                let f64_type = context.f64_type();
                let double = if fv.get_type() == f64_type {
                    fv
                } else {
                    builder.build_float_cast(fv, f64_type, "float_ext")?
                };
                (RuntimeFn::PrintFloat, double.into())
            }
            other => {
                return Err(DeclError::UnsupportedValue(format!("{:?}", other.get_type())))
            }
        };

        let callee = self.get_or_declare(module, func);
        builder.build_call(callee, &[arg], "")?;
        Ok(func)
    }
}
