// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AdminPolicy, AdminPolicyError, AuthError, AuthenticatedActor, AuthorizationService, Role};

use super::helpers::{ADMIN_EMAIL, create_test_admin, create_test_policy, create_test_visitor};

#[test]
fn test_listed_email_is_admin() {
    let policy: AdminPolicy = create_test_policy();

    assert!(policy.is_authorized(&create_test_admin()));
    assert_eq!(create_test_admin().role(&policy), Role::Admin);
}

#[test]
fn test_email_match_ignores_case_and_whitespace() {
    let policy: AdminPolicy = create_test_policy();
    let actor: AuthenticatedActor = AuthenticatedActor::with_email("  Organiza@CLUB.uy ");

    assert!(policy.is_authorized(&actor));
}

#[test]
fn test_unlisted_and_anonymous_actors_are_public() {
    let policy: AdminPolicy = create_test_policy();

    assert_eq!(create_test_visitor().role(&policy), Role::Public);
    assert_eq!(AuthenticatedActor::anonymous().role(&policy), Role::Public);
}

#[test]
fn test_from_list_splits_on_commas() {
    let policy: AdminPolicy = AdminPolicy::from_list("a@x.com, b@y.com ,").unwrap();

    assert!(policy.is_authorized(&AuthenticatedActor::with_email("a@x.com")));
    assert!(policy.is_authorized(&AuthenticatedActor::with_email("b@y.com")));
    assert!(!policy.is_authorized(&AuthenticatedActor::with_email("c@z.com")));
}

#[test]
fn test_entry_without_at_sign_is_rejected() {
    let result: Result<AdminPolicy, AdminPolicyError> = AdminPolicy::from_list("a@x.com, nadie");

    assert_eq!(
        result,
        Err(AdminPolicyError::InvalidEmail {
            entry: String::from(" nadie"),
        })
    );
}

#[test]
fn test_empty_policy_authorizes_nobody() {
    let policy: AdminPolicy = AdminPolicy::default();

    assert!(!policy.is_authorized(&AuthenticatedActor::with_email(ADMIN_EMAIL)));
}

#[test]
fn test_anonymous_admin_action_fails_authentication() {
    let result: Result<(), AuthError> = AuthorizationService::authorize_admin_action(
        &AuthenticatedActor::anonymous(),
        &create_test_policy(),
        "create_tournament",
    );

    assert!(matches!(result, Err(AuthError::AuthenticationFailed { .. })));
}

#[test]
fn test_visitor_admin_action_is_unauthorized() {
    let result: Result<(), AuthError> = AuthorizationService::authorize_admin_action(
        &create_test_visitor(),
        &create_test_policy(),
        "create_tournament",
    );

    assert_eq!(
        result,
        Err(AuthError::Unauthorized {
            action: String::from("create_tournament"),
            required_role: String::from("Admin"),
        })
    );
}
