mod macros;

pub trait Apply {
    /// Applies the function `f` with a mutable reference to `self`.
    ///
    /// #### Example
    /// ```rust
    /// # use contact_form_utils::Apply;
    /// # use contact_form_models::values::FieldValues;
    /// let values = FieldValues::new().with(|v| v.first_name = "George".into());
    /// assert_eq!(values.first_name, "George");
    /// ```
    fn with<X>(mut self, f: impl FnOnce(&mut Self) -> X) -> Self
    where
        Self: Sized,
    {
        f(&mut self);
        self
    }
}

impl<T> Apply for T {}
