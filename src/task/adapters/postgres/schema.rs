//! Diesel schema for task board persistence.

diesel::table! {
    /// Task records owned by a project.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int4,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Urgency level.
        #[max_length = 50]
        priority -> Varchar,
        /// Progress state.
        #[max_length = 50]
        status -> Varchar,
        /// Creation date.
        created_on -> Date,
        /// Due date.
        due_on -> Date,
        /// Owning project.
        project_id -> Int4,
        /// Assigned member, if any.
        member_id -> Nullable<Int4>,
    }
}

diesel::table! {
    /// Projects that own tasks.
    projects (id) {
        /// Project identifier.
        id -> Int4,
        /// Project display name.
        #[max_length = 255]
        name -> Varchar,
    }
}

diesel::table! {
    /// Members assignable to tasks.
    members (id) {
        /// Member identifier.
        id -> Int4,
        /// Member display name.
        #[max_length = 255]
        name -> Varchar,
    }
}

diesel::joinable!(tasks -> projects (project_id));
diesel::joinable!(tasks -> members (member_id));

diesel::allow_tables_to_appear_in_same_query!(tasks, projects, members);
