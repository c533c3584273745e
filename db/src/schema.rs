diesel::table! {
    addresses (address_id) {
        address_id -> Int8,
        zip_code -> Int4,
        city -> Text,
        street -> Text,
    }
}

diesel::table! {
    birth_dates (birth_date_id) {
        birth_date_id -> Int8,
        day -> Int4,
        month -> Int4,
        year -> Int4,
    }
}

diesel::table! {
    projects (project_id) {
        project_id -> Int8,
        client -> Text,
        start_date -> Text,
        description -> Text,
        deleted -> Bool,
    }
}

diesel::table! {
    project_managers (project_manager_id) {
        project_manager_id -> Int8,
        name -> Text,
        address_id -> Nullable<Int8>,
        birth_date_id -> Nullable<Int8>,
        phone_number -> Text,
        email -> Text,
        project_id -> Nullable<Int8>,
        deleted -> Bool,
    }
}

diesel::table! {
    use diesel::sql_types::*;
    use crate::enums::ResponsibilityMapping;

    programmers (programmer_id) {
        programmer_id -> Int8,
        name -> Text,
        address_id -> Nullable<Int8>,
        birth_date_id -> Nullable<Int8>,
        phone_number -> Text,
        email -> Text,
        project_id -> Nullable<Int8>,
        project_manager_id -> Nullable<Int8>,
        responsibility -> ResponsibilityMapping,
        is_apprentice -> Bool,
        deleted -> Bool,
    }
}

diesel::joinable!(programmers -> addresses (address_id));
diesel::joinable!(programmers -> birth_dates (birth_date_id));
diesel::joinable!(programmers -> projects (project_id));
diesel::joinable!(programmers -> project_managers (project_manager_id));
diesel::joinable!(project_managers -> addresses (address_id));
diesel::joinable!(project_managers -> birth_dates (birth_date_id));
diesel::joinable!(project_managers -> projects (project_id));

diesel::allow_tables_to_appear_in_same_query!(
    addresses,
    birth_dates,
    programmers,
    project_managers,
    projects,
);
