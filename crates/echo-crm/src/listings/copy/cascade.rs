use crate::listings::domain::ListingClassification;

use super::domain::TemplateCriteria;

/// Builds the ordered list of lookup patterns for a classification triple.
///
/// The resolver evaluates these in order and stops on the first stored
/// template that matches. Keeping the cascade as data (rather than unrolled
/// query blocks) keeps the fallback order auditable and testable on its own.
///
/// Order of specificity:
/// 1. type + grade + property
/// 2. type + property (grade column NULL)
/// 3. type + grade (property column NULL)
/// 4. type only
/// 5. property only, when the listing carries a property type
/// 6. grade only, when the listing carries a grade but no property type
///
/// The workspace default template is a separate fallback handled by the
/// resolver after the cascade is exhausted.
pub fn cascade(classification: &ListingClassification) -> Vec<TemplateCriteria> {
    let listing_type = Some(classification.listing_type);
    let grade = classification.listing_grade;
    let property = classification.property_type;

    let mut candidates = vec![
        TemplateCriteria {
            listing_type,
            listing_grade: grade,
            property_type: property,
        },
        TemplateCriteria {
            listing_type,
            listing_grade: None,
            property_type: property,
        },
        TemplateCriteria {
            listing_type,
            listing_grade: grade,
            property_type: None,
        },
        TemplateCriteria {
            listing_type,
            listing_grade: None,
            property_type: None,
        },
    ];

    if property.is_some() {
        candidates.push(TemplateCriteria {
            listing_type: None,
            listing_grade: None,
            property_type: property,
        });
    } else if grade.is_some() {
        candidates.push(TemplateCriteria {
            listing_type: None,
            listing_grade: grade,
            property_type: None,
        });
    }

    // When grade or property is absent several candidates collapse to the
    // same pattern, and the repeats are not always adjacent; keep the first
    // occurrence of each so every lookup runs once.
    let mut steps: Vec<TemplateCriteria> = Vec::with_capacity(candidates.len());
    for step in candidates {
        if !steps.contains(&step) {
            steps.push(step);
        }
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::domain::{ListingGrade, ListingType, PropertyType};

    fn classification(
        grade: Option<ListingGrade>,
        property: Option<PropertyType>,
    ) -> ListingClassification {
        ListingClassification {
            listing_type: ListingType::Sell,
            listing_grade: grade,
            property_type: property,
        }
    }

    #[test]
    fn full_triple_walks_five_steps_most_specific_first() {
        let steps = cascade(&classification(
            Some(ListingGrade::A),
            Some(PropertyType::Condo),
        ));

        assert_eq!(steps.len(), 5);
        assert_eq!(
            steps[0],
            TemplateCriteria {
                listing_type: Some(ListingType::Sell),
                listing_grade: Some(ListingGrade::A),
                property_type: Some(PropertyType::Condo),
            }
        );
        assert_eq!(
            steps[4],
            TemplateCriteria {
                listing_type: None,
                listing_grade: None,
                property_type: Some(PropertyType::Condo),
            }
        );
    }

    #[test]
    fn missing_grade_collapses_duplicate_steps() {
        let steps = cascade(&classification(None, Some(PropertyType::House)));

        // (type, property) and (type) each appear once, then property-only.
        assert_eq!(steps.len(), 3);
        assert!(steps.iter().all(|step| step.listing_grade.is_none()));
        assert_eq!(
            steps[2],
            TemplateCriteria {
                listing_type: None,
                listing_grade: None,
                property_type: Some(PropertyType::House),
            }
        );
    }

    #[test]
    fn grade_only_step_requires_absent_property_type() {
        let steps = cascade(&classification(Some(ListingGrade::B), None));

        assert_eq!(
            steps.last(),
            Some(&TemplateCriteria {
                listing_type: None,
                listing_grade: Some(ListingGrade::B),
                property_type: None,
            })
        );

        let with_property = cascade(&classification(
            Some(ListingGrade::B),
            Some(PropertyType::Land),
        ));
        assert!(!with_property.contains(&TemplateCriteria {
            listing_type: None,
            listing_grade: Some(ListingGrade::B),
            property_type: None,
        }));
    }

    #[test]
    fn missing_property_never_repeats_a_lookup() {
        // With a grade but no property type, the type+grade and type-only
        // patterns would each appear twice in the raw candidate order, with
        // other patterns in between.
        let steps = cascade(&classification(Some(ListingGrade::A), None));

        assert_eq!(steps.len(), 3);
        for (index, step) in steps.iter().enumerate() {
            assert!(!steps[index + 1..].contains(step));
        }
        assert_eq!(
            steps[0],
            TemplateCriteria {
                listing_type: Some(ListingType::Sell),
                listing_grade: Some(ListingGrade::A),
                property_type: None,
            }
        );
    }

    #[test]
    fn bare_type_yields_single_step() {
        let steps = cascade(&classification(None, None));
        assert_eq!(
            steps,
            vec![TemplateCriteria {
                listing_type: Some(ListingType::Sell),
                listing_grade: None,
                property_type: None,
            }]
        );
    }
}
