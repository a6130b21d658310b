//! Filter and ordering primitives shared by every table.
//!
//! Operators left at `None` are omitted from the serialized JSON. Hasura treats
//! an absent operator as "no constraint", while an explicit `null` would be
//! rejected or collapsed depending on server settings.

use serde::{Deserialize, Serialize};

use crate::scalars::Jsonb;

/// `<Scalar>ComparisonExp` for any scalar or Postgres enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct ComparisonExp<T> {
    #[serde(rename = "_eq", skip_serializing_if = "Option::is_none")]
    pub eq: Option<T>,
    #[serde(rename = "_neq", skip_serializing_if = "Option::is_none")]
    pub neq: Option<T>,
    #[serde(rename = "_gt", skip_serializing_if = "Option::is_none")]
    pub gt: Option<T>,
    #[serde(rename = "_gte", skip_serializing_if = "Option::is_none")]
    pub gte: Option<T>,
    #[serde(rename = "_lt", skip_serializing_if = "Option::is_none")]
    pub lt: Option<T>,
    #[serde(rename = "_lte", skip_serializing_if = "Option::is_none")]
    pub lte: Option<T>,
    #[serde(rename = "_in", skip_serializing_if = "Option::is_none")]
    pub in_: Option<Vec<T>>,
    #[serde(rename = "_nin", skip_serializing_if = "Option::is_none")]
    pub nin: Option<Vec<T>>,
    #[serde(rename = "_isNull", skip_serializing_if = "Option::is_none")]
    pub is_null: Option<bool>,
}

impl<T> Default for ComparisonExp<T> {
    fn default() -> Self {
        Self {
            eq: None,
            neq: None,
            gt: None,
            gte: None,
            lt: None,
            lte: None,
            in_: None,
            nin: None,
            is_null: None,
        }
    }
}

impl<T> ComparisonExp<T> {
    pub fn eq(value: T) -> Self {
        Self {
            eq: Some(value),
            ..Default::default()
        }
    }

    pub fn neq(value: T) -> Self {
        Self {
            neq: Some(value),
            ..Default::default()
        }
    }

    pub fn in_list(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            in_: Some(values.into_iter().collect()),
            ..Default::default()
        }
    }

    pub fn not_in(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            nin: Some(values.into_iter().collect()),
            ..Default::default()
        }
    }

    pub fn is_null(is_null: bool) -> Self {
        Self {
            is_null: Some(is_null),
            ..Default::default()
        }
    }

    /// Inclusive range; either bound may be open.
    pub fn between(from: Option<T>, to: Option<T>) -> Self {
        Self {
            gte: from,
            lte: to,
            ..Default::default()
        }
    }

    pub fn gt(mut self, value: T) -> Self {
        self.gt = Some(value);
        self
    }

    pub fn gte(mut self, value: T) -> Self {
        self.gte = Some(value);
        self
    }

    pub fn lt(mut self, value: T) -> Self {
        self.lt = Some(value);
        self
    }

    pub fn lte(mut self, value: T) -> Self {
        self.lte = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.eq.is_none()
            && self.neq.is_none()
            && self.gt.is_none()
            && self.gte.is_none()
            && self.lt.is_none()
            && self.lte.is_none()
            && self.in_.is_none()
            && self.nin.is_none()
            && self.is_null.is_none()
    }
}

pub type UuidComparisonExp = ComparisonExp<crate::scalars::Uuid>;
pub type IntComparisonExp = ComparisonExp<i32>;
pub type BooleanComparisonExp = ComparisonExp<bool>;
pub type DateComparisonExp = ComparisonExp<crate::scalars::Date>;
pub type TimestamptzComparisonExp = ComparisonExp<crate::scalars::Timestamptz>;
pub type NumericComparisonExp = ComparisonExp<crate::scalars::Numeric>;

/// `StringComparisonExp`: the generic operators plus the pattern operators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StringComparisonExp {
    #[serde(flatten)]
    pub base: ComparisonExp<String>,
    #[serde(rename = "_like", skip_serializing_if = "Option::is_none")]
    pub like: Option<String>,
    #[serde(rename = "_nlike", skip_serializing_if = "Option::is_none")]
    pub nlike: Option<String>,
    #[serde(rename = "_ilike", skip_serializing_if = "Option::is_none")]
    pub ilike: Option<String>,
    #[serde(rename = "_nilike", skip_serializing_if = "Option::is_none")]
    pub nilike: Option<String>,
    #[serde(rename = "_similar", skip_serializing_if = "Option::is_none")]
    pub similar: Option<String>,
    #[serde(rename = "_nsimilar", skip_serializing_if = "Option::is_none")]
    pub nsimilar: Option<String>,
    #[serde(rename = "_regex", skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    #[serde(rename = "_iregex", skip_serializing_if = "Option::is_none")]
    pub iregex: Option<String>,
}

impl StringComparisonExp {
    pub fn eq(value: impl Into<String>) -> Self {
        Self {
            base: ComparisonExp::eq(value.into()),
            ..Default::default()
        }
    }

    pub fn in_list<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self {
            base: ComparisonExp::in_list(values.into_iter().map(Into::into)),
            ..Default::default()
        }
    }

    /// Case-insensitive substring match. `%` and `_` in `needle` keep their
    /// SQL wildcard meaning.
    pub fn contains_ci(needle: &str) -> Self {
        Self {
            ilike: Some(format!("%{needle}%")),
            ..Default::default()
        }
    }

    pub fn is_null(is_null: bool) -> Self {
        Self {
            base: ComparisonExp::is_null(is_null),
            ..Default::default()
        }
    }
}

/// `JsonbComparisonExp`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonbComparisonExp {
    #[serde(rename = "_eq", skip_serializing_if = "Option::is_none")]
    pub eq: Option<Jsonb>,
    #[serde(rename = "_contains", skip_serializing_if = "Option::is_none")]
    pub contains: Option<Jsonb>,
    #[serde(rename = "_containedIn", skip_serializing_if = "Option::is_none")]
    pub contained_in: Option<Jsonb>,
    #[serde(rename = "_hasKey", skip_serializing_if = "Option::is_none")]
    pub has_key: Option<String>,
    #[serde(rename = "_hasKeysAny", skip_serializing_if = "Option::is_none")]
    pub has_keys_any: Option<Vec<String>>,
    #[serde(rename = "_hasKeysAll", skip_serializing_if = "Option::is_none")]
    pub has_keys_all: Option<Vec<String>>,
    #[serde(rename = "_isNull", skip_serializing_if = "Option::is_none")]
    pub is_null: Option<bool>,
}

impl JsonbComparisonExp {
    pub fn contains(value: Jsonb) -> Self {
        Self {
            contains: Some(value),
            ..Default::default()
        }
    }

    pub fn has_key(key: impl Into<String>) -> Self {
        Self {
            has_key: Some(key.into()),
            ..Default::default()
        }
    }
}

/// Column ordering. Values follow the graphql-default naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderBy {
    Asc,
    AscNullsFirst,
    AscNullsLast,
    Desc,
    DescNullsFirst,
    DescNullsLast,
}

/// Boolean combinators available on every `<Table>BoolExp`.
pub trait BoolExp: Default + Sized {
    fn from_and(operands: Vec<Self>) -> Self;
    fn from_or(operands: Vec<Self>) -> Self;
    fn from_not(operand: Self) -> Self;

    fn and(self, other: Self) -> Self {
        Self::from_and(vec![self, other])
    }

    fn or(self, other: Self) -> Self {
        Self::from_or(vec![self, other])
    }

    #[allow(clippy::should_implement_trait)]
    fn not(self) -> Self {
        Self::from_not(self)
    }

    /// Conjunction of all operands. A single operand is returned unwrapped and an
    /// empty list yields the match-everything expression.
    fn all(operands: impl IntoIterator<Item = Self>) -> Self {
        let mut operands: Vec<Self> = operands.into_iter().collect();
        match operands.len() {
            0 => Self::default(),
            1 => operands.remove(0),
            _ => Self::from_and(operands),
        }
    }

    /// Disjunction of all operands. A single operand is returned unwrapped.
    fn any(operands: impl IntoIterator<Item = Self>) -> Self {
        let mut operands: Vec<Self> = operands.into_iter().collect();
        match operands.len() {
            1 => operands.remove(0),
            _ => Self::from_or(operands),
        }
    }
}

/// Implements [`BoolExp`] for a table expression with `and`, `or` and `not`
/// fields.
#[macro_export]
macro_rules! impl_bool_exp {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::expressions::BoolExp for $ty {
                fn from_and(operands: Vec<Self>) -> Self {
                    Self {
                        and: Some(operands),
                        ..Default::default()
                    }
                }

                fn from_or(operands: Vec<Self>) -> Self {
                    Self {
                        or: Some(operands),
                        ..Default::default()
                    }
                }

                fn from_not(operand: Self) -> Self {
                    Self {
                        not: Some(Box::new(operand)),
                        ..Default::default()
                    }
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn unset_operators_are_omitted() {
        let exp = ComparisonExp::eq(5).gt(1);
        assert_eq!(serde_json::to_value(&exp).unwrap(), json!({"_eq": 5, "_gt": 1}));
        assert!(ComparisonExp::<i32>::default().is_empty());
        assert!(!exp.is_empty());
    }

    #[test]
    fn between_leaves_open_bound_out() {
        let exp = ComparisonExp::between(Some(3), None);
        assert_eq!(serde_json::to_value(&exp).unwrap(), json!({"_gte": 3}));
    }

    #[test]
    fn is_null_uses_camel_case_operator() {
        let exp = ComparisonExp::<i32>::is_null(true);
        assert_eq!(serde_json::to_value(&exp).unwrap(), json!({"_isNull": true}));
    }

    #[test]
    fn string_comparison_flattens_base_operators() {
        let exp = StringComparisonExp::in_list(["a", "b"]);
        assert_eq!(serde_json::to_value(&exp).unwrap(), json!({"_in": ["a", "b"]}));

        let exp = StringComparisonExp::contains_ci("smith");
        assert_eq!(serde_json::to_value(&exp).unwrap(), json!({"_ilike": "%smith%"}));
    }

    #[test]
    fn jsonb_operators() {
        let exp = JsonbComparisonExp::has_key("payrollId");
        assert_eq!(serde_json::to_value(&exp).unwrap(), json!({"_hasKey": "payrollId"}));
    }

    #[test]
    fn order_by_values() {
        assert_eq!(serde_json::to_value(OrderBy::Asc).unwrap(), json!("ASC"));
        assert_eq!(
            serde_json::to_value(OrderBy::DescNullsLast).unwrap(),
            json!("DESC_NULLS_LAST")
        );
    }
}
