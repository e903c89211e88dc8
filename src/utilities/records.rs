//! Record-field utilities.
//!
//! ## Utilities Provided
//!
//! - `findNonEmptyTask`: first record with a non-empty `content`
//! - `filterPremium`: case-insensitive premium brand filter
//! - `getColors`: `color` field of each record argument
//! - `sortPeople`: stable ascending sort by `age`

use crate::errors::ArraykitError;
use crate::utilities::helpers::{list_arg, record_field, ExtractValue};
use crate::utilities::{UtilityFn, UtilityRegistry};
use crate::value::Value;

/// Brands kept by `filterPremium`, lowercase.
pub const PREMIUM_BRANDS: [&str; 3] = ["mercedes", "audi", "bmw"];

/// First task whose `content` is truthy, or nil: findNonEmptyTask(<list>)
pub const FIND_NON_EMPTY_TASK: UtilityFn = |args| {
    let tasks = list_arg(args, 0, "findNonEmptyTask")?;
    for task in tasks {
        if record_field(task, "content", "findNonEmptyTask")?.is_truthy() {
            return Ok(task.clone());
        }
    }
    Ok(Value::Nil)
};

/// Premium brands, original casing and order kept: filterPremium(<list>)
pub const FILTER_PREMIUM: UtilityFn = |args| {
    let brands = list_arg(args, 0, "filterPremium")?;
    let mut premium = Vec::new();
    for brand in brands {
        let name: &str = brand.extract("filterPremium")?;
        if PREMIUM_BRANDS.contains(&name.to_lowercase().as_str()) {
            premium.push(brand.clone());
        }
    }
    Ok(Value::List(premium))
};

/// Colors of every record argument, in order: getColors(<record> <record> ...)
pub const GET_COLORS: UtilityFn = |args| {
    args.iter()
        .map(|car| record_field(car, "color", "getColors").cloned())
        .collect::<Result<Vec<_>, _>>()
        .map(Value::List)
};

/// A copy of the people sorted by ascending age: sortPeople(<list>)
///
/// The sort is stable and the input is left untouched.
pub const SORT_PEOPLE: UtilityFn = |args| {
    let people = list_arg(args, 0, "sortPeople")?;
    let mut keyed = people
        .iter()
        .map(|person| -> Result<(f64, Value), ArraykitError> {
            let age: f64 = record_field(person, "age", "sortPeople")?.extract("sortPeople")?;
            Ok((age, person.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    keyed.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    Ok(Value::List(keyed.into_iter().map(|(_, person)| person).collect()))
};

pub fn register_record_utilities(registry: &mut UtilityRegistry) {
    registry.register("findNonEmptyTask", FIND_NON_EMPTY_TASK);
    registry.register("filterPremium", FILTER_PREMIUM);
    registry.register("getColors", GET_COLORS);
    registry.register("sortPeople", SORT_PEOPLE);
}
