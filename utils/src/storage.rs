#[macro_export]
macro_rules! generate_instance_storage_setter {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        paste! {
            pub fn [<set_ $attr_name>](e: &Env, $attr_name: &$data_type) {
                bump_instance(e);
                e.storage()
                    .instance()
                    .set(&$key, $attr_name)
            }
        }
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        paste! {
            pub fn [<get_ $attr_name>](e: &Env) -> $data_type {
                bump_instance(e);
                let value_result = e.storage().instance().get(&$key);
                match value_result {
                    Some(value) => value,
                    None => {
                        panic_with_error!(e, StorageError::ValueNotInitialized)
                    }
                }
            }
        }
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter_with_default {
    ($attr_name:ident, $key:expr, $data_type:ty, $default:expr) => {
        paste! {
            pub fn [<get_ $attr_name>](e: &Env) -> $data_type {
                bump_instance(e);
                e.storage().instance().get(&$key).unwrap_or($default)
            }
        }
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter_and_setter {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        generate_instance_storage_getter!($attr_name, $key, $data_type);
        generate_instance_storage_setter!($attr_name, $key, $data_type);
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter_and_setter_with_default {
    ($attr_name:ident, $key:expr, $data_type:ty, $default:expr) => {
        generate_instance_storage_getter_with_default!($attr_name, $key, $data_type, $default);
        generate_instance_storage_setter!($attr_name, $key, $data_type);
    };
}

// Keyed persistent storage with default-empty reads.
// Expects `$key` to be a single-field tuple variant of the caller's `DataKey`.
#[macro_export]
macro_rules! generate_persistent_storage_map {
    ($attr_name:ident, $key:path, $key_type:ty, $data_type:ty) => {
        paste! {
            pub fn [<get_ $attr_name>](e: &Env, key: &$key_type) -> Option<$data_type> {
                let storage_key = $key(key.clone());
                let value = e.storage().persistent().get(&storage_key);
                if value.is_some() {
                    bump_persistent(e, &storage_key);
                }
                value
            }

            pub fn [<set_ $attr_name>](e: &Env, key: &$key_type, value: &$data_type) {
                let storage_key = $key(key.clone());
                e.storage().persistent().set(&storage_key, value);
                bump_persistent(e, &storage_key);
            }
        }
    };
}
