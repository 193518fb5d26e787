#![deny(missing_docs)]

//! # File Templates
//!
//! Renders the TypeScript files created by the generators. Names are passed in
//! raw and cased here with the naming utilities.

use crate::naming::{camelize, classify};

/// `<name>.actions.ts`: an action type enum, one action class and the union type.
pub fn actions(name: &str) -> String {
    let class = classify(name);
    format!(
        r#"import {{ Action }} from '@ngrx/store';

export enum {class}ActionTypes {{
  Load{class}s = '[{class}] Load {class}s'
}}

export class Load{class}s implements Action {{
  readonly type = {class}ActionTypes.Load{class}s;
}}

export type {class}Actions = Load{class}s;
"#
    )
}

/// `<name>.reducer.ts`: state interface, initial state and a pass-through reducer.
pub fn reducer() -> String {
    r#"import { Action } from '@ngrx/store';

export interface State {

}

export const initialState: State = {

};

export function reducer(state = initialState, action: Action): State {
  switch (action.type) {

    default:
      return state;
  }
}
"#
    .to_string()
}

/// `<name>.reducer.spec.ts`
pub fn reducer_spec(name: &str, file_stem: &str) -> String {
    let class = classify(name);
    format!(
        r#"import {{ reducer, initialState }} from './{file_stem}';

describe('{class} Reducer', () => {{
  describe('unknown action', () => {{
    it('should return the initial state', () => {{
      const action = {{}} as any;

      const result = reducer(initialState, action);

      expect(result).toBe(initialState);
    }});
  }});
}});
"#
    )
}

/// `<name>.effects.ts`: an injectable effects class.
pub fn effects(name: &str) -> String {
    let class = classify(name);
    format!(
        r#"import {{ Injectable }} from '@angular/core';
import {{ Actions, Effect }} from '@ngrx/effects';

@Injectable()
export class {class}Effects {{

  constructor(private actions$: Actions) {{}}
}}
"#
    )
}

/// `<name>.effects.spec.ts`
pub fn effects_spec(name: &str, file_stem: &str) -> String {
    let class = classify(name);
    format!(
        r#"import {{ TestBed, inject }} from '@angular/core/testing';
import {{ provideMockActions }} from '@ngrx/effects/testing';
import {{ Observable }} from 'rxjs/Observable';

import {{ {class}Effects }} from './{file_stem}';

describe('{class}Effects', () => {{
  let actions$: Observable<any>;
  let effects: {class}Effects;

  beforeEach(() => {{
    TestBed.configureTestingModule({{
      providers: [
        {class}Effects,
        provideMockActions(() => actions$)
      ]
    }});

    effects = TestBed.get({class}Effects);
  }});

  it('should be created', () => {{
    expect(effects).toBeTruthy();
  }});
}});
"#
    )
}

/// `<statePath>/index.ts`: root or feature state with its reducer map and meta-reducers.
pub fn store_index(state_interface: &str, environments_reference: &str) -> String {
    format!(
        r#"import {{
  ActionReducer,
  ActionReducerMap,
  createFeatureSelector,
  createSelector,
  MetaReducer
}} from '@ngrx/store';
import {{ environment }} from '{environments_reference}';

export interface {state_interface} {{

}}

export const reducers: ActionReducerMap<{state_interface}> = {{

}};


export const metaReducers: MetaReducer<{state_interface}>[] = !environment.production ? [] : [];
"#
    )
}

/// `<name>.model.ts`: the entity interface.
pub fn entity_model(name: &str) -> String {
    format!(
        r#"export interface {class} {{
  id: string;
}}
"#,
        class = classify(name)
    )
}

/// Entity actions as `(action, payload)`; `{}` is the class, `{one}` / `{many}`
/// the payload keys.
const ENTITY_ACTIONS: [(&str, Option<&str>); 8] = [
    ("Load{}s", Some("{many}: {}[]")),
    ("Add{}", Some("{one}: {}")),
    ("Upsert{}", Some("{one}: {}")),
    ("Add{}s", Some("{many}: {}[]")),
    ("Update{}", Some("{one}: Update<{}>")),
    ("Delete{}", Some("id: string")),
    ("Delete{}s", Some("ids: string[]")),
    ("Clear{}s", None),
];

/// `<name>.actions.ts` for an entity: one action class per adapter operation.
pub fn entity_actions(name: &str, model_reference: &str) -> String {
    let class = classify(name);
    let one = camelize(name);
    let fill = |pattern: &str| {
        pattern
            .replace("{one}", &one)
            .replace("{many}", &format!("{one}s"))
            .replace("{}", &class)
    };
    let actions: Vec<(String, Option<String>)> = ENTITY_ACTIONS
        .iter()
        .map(|&(action, payload)| (fill(action), payload.map(&fill)))
        .collect();

    let mut out = format!(
        "import {{ Action }} from '@ngrx/store';\nimport {{ Update }} from '@ngrx/entity';\nimport {{ {class} }} from '{model_reference}';\n\nexport enum {class}ActionTypes {{\n"
    );
    let members: Vec<String> = actions
        .iter()
        .map(|(action, _)| {
            let label = action.strip_suffix(&class).map_or_else(
                || action.replacen(&class, &format!(" {class}"), 1),
                |verb| format!("{verb} {class}"),
            );
            format!("  {action} = '[{class}] {label}'")
        })
        .collect();
    out.push_str(&members.join(",\n"));
    out.push_str("\n}\n");

    for (action, payload) in &actions {
        out.push_str(&format!(
            "\nexport class {action} implements Action {{\n  readonly type = {class}ActionTypes.{action};\n"
        ));
        if let Some(payload) = payload {
            out.push_str(&format!("\n  constructor(public payload: {{ {payload} }}) {{}}\n"));
        }
        out.push_str("}\n");
    }

    let union: Vec<&str> = actions.iter().map(|(action, _)| action.as_str()).collect();
    out.push_str(&format!(
        "\nexport type {class}Actions =\n  | {};\n",
        union.join("\n  | ")
    ));
    out
}

/// `<name>.reducer.ts` for an entity: adapter, initial state, reducer and selectors.
pub fn entity_reducer(name: &str, model_reference: &str, actions_reference: &str) -> String {
    let class = classify(name);
    let one = camelize(name);
    format!(
        r#"import {{ EntityState, EntityAdapter, createEntityAdapter }} from '@ngrx/entity';
import {{ {class} }} from '{model_reference}';
import {{ {class}Actions, {class}ActionTypes }} from '{actions_reference}';

export interface State extends EntityState<{class}> {{

}}

export const adapter: EntityAdapter<{class}> = createEntityAdapter<{class}>();

export const initialState: State = adapter.getInitialState({{}});

export function reducer(
  state = initialState,
  action: {class}Actions
): State {{
  switch (action.type) {{
    case {class}ActionTypes.Add{class}: {{
      return adapter.addOne(action.payload.{one}, state);
    }}

    case {class}ActionTypes.Upsert{class}: {{
      return adapter.upsertOne(action.payload.{one}, state);
    }}

    case {class}ActionTypes.Add{class}s: {{
      return adapter.addMany(action.payload.{one}s, state);
    }}

    case {class}ActionTypes.Update{class}: {{
      return adapter.updateOne(action.payload.{one}, state);
    }}

    case {class}ActionTypes.Delete{class}: {{
      return adapter.removeOne(action.payload.id, state);
    }}

    case {class}ActionTypes.Delete{class}s: {{
      return adapter.removeMany(action.payload.ids, state);
    }}

    case {class}ActionTypes.Load{class}s: {{
      return adapter.addAll(action.payload.{one}s, state);
    }}

    case {class}ActionTypes.Clear{class}s: {{
      return adapter.removeAll(state);
    }}

    default: {{
      return state;
    }}
  }}
}}

export const {{
  selectIds,
  selectEntities,
  selectAll,
  selectTotal,
}} = adapter.getSelectors();
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_actions_template() {
        let code = actions("user-profile");
        assert!(code.contains("export enum UserProfileActionTypes"));
        assert!(code.contains("export class LoadUserProfiles implements Action"));
        parse("user-profile.actions.ts", &code).unwrap();
    }

    #[test]
    fn test_effects_template_parses_with_decorator() {
        let code = effects("users");
        let doc = parse("users.effects.ts", &code).unwrap();
        let class = doc.tree().classes().next().unwrap();
        assert_eq!(class.name.as_deref(), Some("UsersEffects"));
        assert_eq!(class.decorators[0].name, "Injectable");
    }

    #[test]
    fn test_store_index_is_patchable() {
        let code = store_index("AppState", "../../environments/environment");
        let doc = parse("index.ts", &code).unwrap();
        assert_eq!(doc.tree().interfaces().next().unwrap().name, "AppState");
        assert!(doc.tree().variable("reducers").is_some());
        assert!(code.contains("MetaReducer<AppState>[]"));
    }

    #[test]
    fn test_specs_reference_stem() {
        assert!(reducer_spec("users", "users.reducer").contains("from './users.reducer'"));
        assert!(effects_spec("users", "users.effects").contains("import { UsersEffects } from './users.effects';"));
        parse("users.reducer.ts", &reducer()).unwrap();
    }

    #[test]
    fn test_entity_templates_parse() {
        let actions = entity_actions("user", "../models/user.model");
        assert!(actions.contains("import { User } from '../models/user.model';"));
        assert!(actions.contains("  LoadUsers = '[User] Load Users',"));
        assert!(actions.contains("  UpdateUser = '[User] Update User',"));
        assert!(actions.contains("constructor(public payload: { user: Update<User> }) {}"));
        assert!(actions.contains("export class ClearUsers implements Action {\n  readonly type = UserActionTypes.ClearUsers;\n}"));
        assert!(actions.contains("  | LoadUsers\n"));
        parse("user.actions.ts", &actions).unwrap();

        let reducer = entity_reducer("user", "./user.model", "./user.actions");
        assert!(reducer.contains("export interface State extends EntityState<User> {"));
        assert!(reducer.contains("return adapter.addOne(action.payload.user, state);"));
        let doc = parse("user.reducer.ts", &reducer).unwrap();
        assert!(doc.tree().variable("initialState").is_some());

        assert_eq!(doc.tree().interfaces().next().unwrap().name, "State");

        let model = parse("user.model.ts", &entity_model("user")).unwrap();
        assert_eq!(model.tree().interfaces().next().unwrap().name, "User");
    }
}
