use crate::abi::{c_prototype, runtime_symbols, AbiParam, RuntimeFn};

#[test]
fn symbol_table_lists_every_entry_point_in_order() {
    let symbols = runtime_symbols();
    let names: Vec<&str> = symbols.keys().copied().collect();
    assert_eq!(
        names,
        vec!["__coco_print_int", "__coco_print_float", "__coco_print_bool"]
    );
    assert_eq!(symbols["__coco_print_bool"], RuntimeFn::PrintBool);
    assert_eq!(symbols["__coco_print_bool"].param(), AbiParam::I64);
    assert!(symbols.get("print_bool_wrapper").is_none());
}

#[test]
fn c_prototypes() {
    assert_eq!(
        c_prototype(RuntimeFn::PrintInt),
        "void __coco_print_int(int64_t value);"
    );
    assert_eq!(
        c_prototype(RuntimeFn::PrintFloat),
        "void __coco_print_float(double value);"
    );
    assert_eq!(
        c_prototype(RuntimeFn::PrintBool),
        "void __coco_print_bool(int64_t value);"
    );
}
