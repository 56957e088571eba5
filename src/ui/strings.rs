//! User-facing text in the supported locales.
//!
//! English is the default. Russian carries the labels, prompts, and
//! validation messages the table originally shipped with.

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// Parses a locale identifier such as `"en"` or `"ru-RU"`.
    ///
    /// Only the language part is inspected, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use zelltable::ui::strings::Locale;
    ///
    /// assert_eq!(Locale::from_tag("ru-RU"), Some(Locale::Ru));
    /// assert_eq!(Locale::from_tag("EN"), Some(Locale::En));
    /// assert_eq!(Locale::from_tag("de"), None);
    /// ```
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let language = tag.trim().split(['-', '_']).next().unwrap_or_default();
        match language.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "ru" => Some(Self::Ru),
            _ => None,
        }
    }

    /// The string table for this locale.
    #[must_use]
    pub fn strings(self) -> &'static Strings {
        match self {
            Self::En => &EN,
            Self::Ru => &RU,
        }
    }
}

/// Every piece of text the UI renders.
#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    pub column_name: &'static str,
    pub column_date: &'static str,
    pub column_age: &'static str,
    pub search_label: &'static str,
    pub add_title: &'static str,
    pub edit_title: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub delete_prompt: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub name_required: &'static str,
    pub date_required: &'static str,
    pub date_invalid: &'static str,
    pub age_required: &'static str,
    pub age_range: &'static str,
    pub empty_message: &'static str,
    pub empty_subtitle: &'static str,
    pub no_matches_message: &'static str,
    pub no_matches_subtitle: &'static str,
    /// Footer hints, one per context.
    pub keys_normal: &'static str,
    pub keys_search_typing: &'static str,
    pub keys_search_navigating: &'static str,
    pub keys_form: &'static str,
    pub keys_prompt: &'static str,
}

static EN: Strings = Strings {
    title: "Records",
    column_name: "NAME",
    column_date: "DATE",
    column_age: "AGE",
    search_label: "Search",
    add_title: "Add record",
    edit_title: "Edit record",
    save: "Save",
    cancel: "Cancel",
    delete_prompt: "Are you sure you want to delete?",
    yes: "Yes",
    no: "No",
    name_required: "Enter a name",
    date_required: "Select a date",
    date_invalid: "Use the DD-MM-YYYY format",
    age_required: "Enter an age",
    age_range: "Age must be between 0 and 100",
    empty_message: "No records yet",
    empty_subtitle: "Press 'a' to add one",
    no_matches_message: "Nothing matches the search",
    no_matches_subtitle: "Esc clears the query",
    keys_normal: "j/k: navigate  a: add  e: edit  d: delete  1/2/3: sort  /: search  q: quit",
    keys_search_typing: "ESC: exit search  Enter: results  Ctrl+n/p: navigate  Type to filter",
    keys_search_navigating: "ESC: exit search  /: edit query  j/k: navigate  e: edit  d: delete",
    keys_form: "Tab/↓: next field  Shift+Tab/↑: previous  Enter: save  Esc: cancel",
    keys_prompt: "y: yes  n/Esc: no  ←/→: choose  Enter: accept",
};

static RU: Strings = Strings {
    title: "Записи",
    column_name: "ИМЯ",
    column_date: "ДАТА",
    column_age: "ВОЗРАСТ",
    search_label: "Поиск",
    add_title: "Добавить запись",
    edit_title: "Редактировать запись",
    save: "Сохранить",
    cancel: "Отмена",
    delete_prompt: "Вы уверены, что хотите удалить?",
    yes: "Да",
    no: "Нет",
    name_required: "Введите имя",
    date_required: "Выберите дату",
    date_invalid: "Формат даты ДД-ММ-ГГГГ",
    age_required: "Введите возраст",
    age_range: "Возраст должен быть от 0 до 100",
    empty_message: "Записей пока нет",
    empty_subtitle: "Нажмите 'a', чтобы добавить",
    no_matches_message: "Ничего не найдено",
    no_matches_subtitle: "Esc очищает поиск",
    keys_normal: "j/k: перемещение  a: добавить  e: изменить  d: удалить  1/2/3: сортировка  /: поиск  q: скрыть",
    keys_search_typing: "ESC: выйти из поиска  Enter: к результатам  Ctrl+n/p: перемещение  Введите запрос",
    keys_search_navigating: "ESC: выйти из поиска  /: изменить запрос  j/k: перемещение  e: изменить  d: удалить",
    keys_form: "Tab/↓: следующее поле  Shift+Tab/↑: предыдущее  Enter: сохранить  Esc: отмена",
    keys_prompt: "y: да  n/Esc: нет  ←/→: выбор  Enter: подтвердить",
};
